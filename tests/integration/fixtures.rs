//! In-memory linked record graph used across the integration tests.
//!
//! Records are cheap `Rc` handles; links are named and added after
//! construction so tests can build cyclic graphs (issue → repository →
//! issues → ...) the way a real data layer would present them.

use repligraph::replica::HostedRecord;
use repligraph::{AttributeMap, RecordId, Replicate, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone)]
pub struct HubRecord {
    inner: Rc<Inner>,
}

struct Inner {
    kind: &'static str,
    id: i64,
    attrs: AttributeMap,
    links: RefCell<HashMap<&'static str, Vec<HubRecord>>>,
}

impl HubRecord {
    pub fn new(kind: &'static str, id: i64, attrs: AttributeMap) -> Self {
        Self {
            inner: Rc::new(Inner {
                kind,
                id,
                attrs,
                links: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Append `other` to the named link collection.
    pub fn link(&self, name: &'static str, other: &HubRecord) {
        self.inner
            .links
            .borrow_mut()
            .entry(name)
            .or_default()
            .push(other.clone());
    }

    /// All records under a named link, in link order.
    pub fn linked(&self, name: &str) -> Vec<HubRecord> {
        self.inner
            .links
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// First record under a named link, if any.
    pub fn first_linked(&self, name: &str) -> Option<HubRecord> {
        self.inner
            .links
            .borrow()
            .get(name)
            .and_then(|records| records.first().cloned())
    }
}

impl Replicate for HubRecord {
    fn kind(&self) -> &str {
        self.inner.kind
    }

    fn id(&self) -> RecordId {
        RecordId::from(self.inner.id)
    }

    fn snapshot(&self) -> Result<AttributeMap> {
        Ok(self.inner.attrs.clone())
    }
}

impl HostedRecord for HubRecord {
    fn owner(&self) -> Option<Self> {
        self.first_linked("owner")
    }

    fn user(&self) -> Option<Self> {
        self.first_linked("user")
    }

    fn repository(&self) -> Option<Self> {
        self.first_linked("repository")
    }

    fn issue(&self) -> Option<Self> {
        self.first_linked("issue")
    }

    fn pull_request(&self) -> Option<Self> {
        self.first_linked("pull_request")
    }

    fn issues(&self) -> Vec<Self> {
        self.linked("issues")
    }

    fn comments(&self) -> Vec<Self> {
        self.linked("comments")
    }

    fn pull_requests(&self) -> Vec<Self> {
        self.linked("pull_requests")
    }

    fn review_comments(&self) -> Vec<Self> {
        self.linked("review_comments")
    }
}

pub fn user(id: i64, login: &str) -> HubRecord {
    HubRecord::new("user", id, AttributeMap::new().with("login", login))
}

pub fn repository(id: i64, name: &str) -> HubRecord {
    HubRecord::new(
        "repository",
        id,
        AttributeMap::new().with("name", name).with("private", false),
    )
}

pub fn issue(id: i64, title: &str) -> HubRecord {
    HubRecord::new(
        "issue",
        id,
        AttributeMap::new().with("title", title).with("state", "open"),
    )
}

pub fn issue_comment(id: i64, body: &str) -> HubRecord {
    HubRecord::new("issue_comment", id, AttributeMap::new().with("body", body))
}

pub fn pull_request(id: i64, title: &str) -> HubRecord {
    HubRecord::new(
        "pull_request",
        id,
        AttributeMap::new().with("title", title).with("state", "open"),
    )
}

pub fn review_comment(id: i64, body: &str) -> HubRecord {
    HubRecord::new(
        "pull_request_review_comment",
        id,
        AttributeMap::new().with("body", body),
    )
}
