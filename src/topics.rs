/// Technology interests offered in the selection menu, in display order.
pub const TECH_INTERESTS: &[&str] = &[
    "Web Development",
    "Mobile App Development",
    "Data Science",
    "Machine Learning",
    "Artificial Intelligence",
    "Cybersecurity",
    "Cloud Computing",
    "DevOps",
    "Blockchain",
    "Internet of Things (IoT)",
];

/// Fixed, ordered topic menu addressed by 1-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<String>,
}

impl TopicCatalog {
    pub fn new<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Looks up a topic by its 1-based menu number.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.topics.get(idx))
            .map(String::as_str)
    }

    /// Menu entries paired with their 1-based numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.topics
            .iter()
            .enumerate()
            .map(|(idx, topic)| (idx + 1, topic.as_str()))
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::new(TECH_INTERESTS.iter().copied())
    }
}
