//! One publishing run
//!
//! `CheckPreconditions -> AcquireContent -> Assemble -> Insert -> Publish`.
//! Every step moves forward exactly once. Content acquisition branches on the
//! source's outcome (generated, scraped or fallback); only precondition and
//! marker failures stop a run, everything else is logged and absorbed.

use chrono::{DateTime, Local};
use rand::Rng;
use std::path::PathBuf;
use thiserror::Error;

use crate::content::{
    select_fallback, Article, CleanedSource, ContentSource, FallbackTemplate, ProcessSource,
    TopicSelector, WorkflowVariant,
};
use crate::document::{self, DocumentError, MarkerNotFound};
use crate::post::{Fragment, PostAssembler};
use crate::publish::{commit_message, Publisher};
use crate::Autopost;

/// Errors that end a run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error(transparent)]
    MarkerNotFound(#[from] MarkerNotFound),

    #[error("failed to update document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<DocumentError> for RunError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::MarkerNotFound(e) => RunError::MarkerNotFound(e),
            DocumentError::Io { path, source } => RunError::Io { path, source },
        }
    }
}

/// Where the article body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Source(WorkflowVariant),
    Fallback(FallbackTemplate),
}

/// What happened to the commit and push
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    Failed(String),
    Skipped,
}

/// Per-run switches
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub variant: WorkflowVariant,
    /// Render only; leave the document and repository alone
    pub dry_run: bool,
}

/// An assembled post that has not been inserted yet
#[derive(Debug, Clone)]
pub struct Prepared {
    pub article: Article,
    pub fragment: Fragment,
    pub origin: ContentOrigin,
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub variant: WorkflowVariant,
    pub title: String,
    pub topic: String,
    pub origin: ContentOrigin,
    pub image: Option<PathBuf>,
    pub fragment: Fragment,
    pub publish: PublishOutcome,
}

/// The content source configured for a variant
pub fn source_for(site: &Autopost, variant: WorkflowVariant) -> Box<dyn ContentSource> {
    let source = ProcessSource::new(&site.base_dir, variant.source_config(&site.config));
    match variant {
        WorkflowVariant::Scraper => Box::new(CleanedSource::new(source)),
        WorkflowVariant::Generator | WorkflowVariant::Enhanced => Box::new(source),
    }
}

/// Runs the publishing pipeline for one blog
pub struct Workflow<'a> {
    site: &'a Autopost,
    assembler: PostAssembler,
    topics: TopicSelector,
}

impl<'a> Workflow<'a> {
    pub fn new(site: &'a Autopost) -> Result<Self, RunError> {
        let topics = TopicSelector::new(site.config.topics.clone())
            .ok_or_else(|| RunError::Precondition("no topics configured".to_string()))?;

        Ok(Self {
            site,
            assembler: PostAssembler::new(&site.config),
            topics,
        })
    }

    /// Fetch a body from `source`, or the variant's fallback when it fails
    pub fn acquire(
        &self,
        variant: WorkflowVariant,
        source: &dyn ContentSource,
        now: &DateTime<Local>,
    ) -> (String, ContentOrigin) {
        tracing::info!("Acquiring content from {}", source.describe());
        match source.fetch() {
            Ok(body) => {
                tracing::info!("Content acquired from {} workflow", variant);
                (body, ContentOrigin::Source(variant))
            }
            Err(e) => {
                let (template, body) = select_fallback(variant, &e, now);
                tracing::warn!("{}; using fallback template {}", e, template);
                (body, ContentOrigin::Fallback(template))
            }
        }
    }

    /// Acquire content, pick a topic and assemble the fragment
    pub fn prepare<R: Rng + ?Sized>(
        &self,
        variant: WorkflowVariant,
        source: &dyn ContentSource,
        rng: &mut R,
        now: &DateTime<Local>,
    ) -> Prepared {
        let (body, origin) = self.acquire(variant, source, now);
        let topic = self.topics.select(rng);
        tracing::info!("Selected topic: {}", topic);

        let (article, fragment) = self
            .assembler
            .assemble(&body, topic, now, &self.site.image_dir);
        match &article.image {
            Some(image) => tracing::info!("Using image {:?}", image),
            None => tracing::debug!("No image found in {:?}", self.site.image_dir),
        }

        Prepared {
            article,
            fragment,
            origin,
        }
    }

    /// Run every step, inserting into the document and publishing unless `dry_run`
    pub fn run<R: Rng + ?Sized>(
        &self,
        options: RunOptions,
        source: &dyn ContentSource,
        publisher: &dyn Publisher,
        rng: &mut R,
        now: &DateTime<Local>,
    ) -> Result<RunReport, RunError> {
        self.site.check_preconditions()?;
        if let Some(pending) = publisher.unpushed_commits().filter(|n| *n > 0) {
            tracing::warn!(
                "{} commit(s) from earlier runs are not on the remote yet; this run's push includes them",
                pending
            );
        }

        tracing::info!("Starting {} workflow", options.variant);
        let prepared = self.prepare(options.variant, source, rng, now);

        let publish = if options.dry_run {
            tracing::info!("Dry run; document and repository left unchanged");
            PublishOutcome::Skipped
        } else {
            document::insert_into_file(
                &self.site.document_path,
                prepared.fragment.as_str(),
                &self.site.config.marker,
            )?;
            tracing::info!(
                "Inserted \"{}\" into {:?}",
                prepared.article.title,
                self.site.document_path
            );

            let changed = vec![self.document_relative_path()];
            let message = commit_message(&prepared.article.topic, now);
            match publisher.publish(&changed, &message) {
                Ok(()) => PublishOutcome::Published,
                Err(e) => {
                    tracing::error!("Publish failed: {}", e);
                    PublishOutcome::Failed(e.to_string())
                }
            }
        };

        tracing::info!("Workflow finished: {}", prepared.article.title);

        Ok(RunReport {
            variant: options.variant,
            title: prepared.article.title,
            topic: prepared.article.topic,
            origin: prepared.origin,
            image: prepared.article.image,
            fragment: prepared.fragment,
            publish,
        })
    }

    fn document_relative_path(&self) -> PathBuf {
        self.site
            .document_path
            .strip_prefix(&self.site.base_dir)
            .unwrap_or(&self.site.document_path)
            .to_path_buf()
    }
}
