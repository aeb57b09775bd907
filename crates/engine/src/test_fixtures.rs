//! Shared fixtures for unit and HTTP tests.

use std::sync::Arc;

use charforge_domain::{Names, PersonalityCatalog, PersonalityType};

use crate::app::App;
use crate::infrastructure::{datasets::Datasets, ports::RandomPort};

pub fn names(male: &[&str], female: &[&str], last: &[&str]) -> Names {
    let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
    Names::new(owned(male), owned(female), owned(last))
}

/// One name per list: Sam (male), Alex (female), Doe.
pub fn sample_names() -> Names {
    names(&["Sam"], &["Alex"], &["Doe"])
}

pub fn sample_personality() -> PersonalityCatalog {
    let link = |t: &str| format!("https://www.16personalities.com/{}-personality", t.to_lowercase());
    PersonalityCatalog::new(
        ["INTJ", "ENFP", "ISTP"]
            .iter()
            .map(|t| PersonalityType::new(*t, link(t)))
            .collect(),
        vec![
            "Lawful Good".into(),
            "Chaotic Neutral".into(),
            "True Neutral".into(),
        ],
    )
}

pub fn app_with(
    names: Names,
    personality: PersonalityCatalog,
    random: Arc<dyn RandomPort>,
) -> Arc<App> {
    let datasets = Arc::new(Datasets::from_parts(names, personality));
    Arc::new(App::new(datasets, random))
}
