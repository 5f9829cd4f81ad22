use serde::Deserialize;

/// List responses come in two shapes depending on the server's
/// pagination setting: a bare array, or an object wrapping the records
/// under `results`. Callers always get a plain `Vec`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_records(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(records) => records,
            ListEnvelope::Paginated { results } => results,
        }
    }
}
