use super::interface::LabelItem;

/// Labels must score strictly above this to be reported
pub const CONFIDENCE_THRESHOLD: f64 = 90.0;

/// Labels that passed the confidence filter
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLabels {
    /// Retained names joined with the join delimiter, ready for translation
    pub joined_names: String,
    /// Retained labels in the service's original order
    pub retained: Vec<LabelItem>,
}

impl DetectedLabels {
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.retained.iter().map(|item| item.name.as_str())
    }
}

/// Keep labels with confidence > [`CONFIDENCE_THRESHOLD`] and join their names
pub fn filter_confident(items: Vec<LabelItem>, join_delimiter: &str) -> DetectedLabels {
    let retained: Vec<LabelItem> = items
        .into_iter()
        .filter(|item| item.confidence > CONFIDENCE_THRESHOLD)
        .collect();

    let joined_names = retained
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(join_delimiter);

    DetectedLabels {
        joined_names,
        retained,
    }
}
