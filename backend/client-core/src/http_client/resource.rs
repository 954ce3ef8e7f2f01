use serde::Deserialize;

/// A single resource, either bare or inside Laravel's `{"data": ...}` wrapper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Resource<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Resource<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Resource::Wrapped { data } => data,
            Resource::Bare(inner) => inner,
        }
    }
}
