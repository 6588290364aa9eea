use std::{ops::Deref, sync::Arc};

///
/// Identity of the platform component that delivers events.
///
/// Fields live behind an Arc so request extensions stay cheap to clone.
///
#[derive(Clone)]
pub struct Caller {
    inner: Arc<InnerCaller>,
}

pub struct InnerCaller {
    pub id: String,
    pub roles: Vec<String>,
}

impl Caller {
    pub fn new(id: String, roles: Vec<String>) -> Self {
        Self {
            inner: Arc::new(InnerCaller { id, roles }),
        }
    }
}

impl Deref for Caller {
    type Target = InnerCaller;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
