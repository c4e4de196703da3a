//! List configured topics

use crate::Autopost;

/// Print the topics a run chooses from
pub fn run(site: &Autopost) {
    println!("Topics ({}):", site.config.topics.len());
    for topic in lines(site) {
        println!("{}", topic);
    }
}

fn lines(site: &Autopost) -> Vec<String> {
    site.config
        .topics
        .iter()
        .enumerate()
        .map(|(i, topic)| format!("  {:>2}. {}", i + 1, topic))
        .collect()
}
