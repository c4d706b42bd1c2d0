//! Grouping of related features.

use crate::feature::Feature;

/// A named group of features, e.g. all options for one console.
pub trait FeatureContainer {
    fn name(&self) -> &'static str;

    fn features(&self) -> &[Feature];

    fn feature(&self, key: &str) -> Option<&Feature> {
        self.features().iter().find(|f| f.key == key)
    }

    /// Features sorted alphabetically by display name.
    fn sorted_features(&self) -> Vec<&Feature> {
        let mut features: Vec<&Feature> = self.features().iter().collect();
        features.sort_by(|a, b| a.name.cmp(b.name));
        features
    }
}
