//! Reference expansion rules for a code-hosting replication use case.
//!
//! Six rules cover the classic replication graph: repositories, users,
//! issues, issue comments, pull requests, and pull request review
//! comments. Each rule follows the ordering convention (dump prerequisite
//! relations, emit the subject, dump dependent relations) so a consumer
//! reading the stream in order never sees a record before the records it
//! points at.
//!
//! The engine itself is agnostic to these kinds; this module is one
//! policy set, installable with [`install`]. Bring your own rules for
//! other domains.

use crate::dumper::Dumper;
use crate::error::Result;
use crate::record::Replicate;
use crate::sink::WriteSink;

/// Kind names the reference rules are registered under.
///
/// A [`HostedRecord`] implementation must return these exact strings from
/// its `kind()` accessor for the matching rules to fire.
pub mod kinds {
    /// A repository record.
    pub const REPOSITORY: &str = "repository";
    /// A user account record.
    pub const USER: &str = "user";
    /// An issue record.
    pub const ISSUE: &str = "issue";
    /// A comment on an issue.
    pub const ISSUE_COMMENT: &str = "issue_comment";
    /// A pull request record.
    pub const PULL_REQUEST: &str = "pull_request";
    /// A review comment on a pull request.
    pub const REVIEW_COMMENT: &str = "pull_request_review_comment";
}

/// Relationship accessors the reference rules traverse.
///
/// Every accessor has a default returning "no related records", so an
/// implementation only defines the relationships its records actually
/// carry. Singular accessors return `None` for an absent reference;
/// collection accessors return records in the order they should be
/// dumped.
pub trait HostedRecord: Replicate + Sized {
    /// Owning user of a repository.
    fn owner(&self) -> Option<Self> {
        None
    }

    /// Authoring user of an issue, comment, or pull request.
    fn user(&self) -> Option<Self> {
        None
    }

    /// Repository an issue or pull request belongs to.
    fn repository(&self) -> Option<Self> {
        None
    }

    /// Issue a comment belongs to.
    fn issue(&self) -> Option<Self> {
        None
    }

    /// Pull request a review comment belongs to.
    fn pull_request(&self) -> Option<Self> {
        None
    }

    /// Issues of a repository.
    fn issues(&self) -> Vec<Self> {
        Vec::new()
    }

    /// Comments of an issue.
    fn comments(&self) -> Vec<Self> {
        Vec::new()
    }

    /// Pull requests of a repository.
    fn pull_requests(&self) -> Vec<Self> {
        Vec::new()
    }

    /// Review comments of a pull request.
    fn review_comments(&self) -> Vec<Self> {
        Vec::new()
    }
}

/// Register all six reference rules on a dumper.
pub fn install<E, S>(dumper: &mut Dumper<E, S>)
where
    E: HostedRecord + 'static,
    S: WriteSink + 'static,
{
    dumper.register(kinds::REPOSITORY, expand_repository);
    dumper.register(kinds::USER, expand_user);
    dumper.register(kinds::ISSUE, expand_issue);
    dumper.register(kinds::ISSUE_COMMENT, expand_issue_comment);
    dumper.register(kinds::PULL_REQUEST, expand_pull_request);
    dumper.register(kinds::REVIEW_COMMENT, expand_review_comment);
}

fn expand_repository<E, S>(dumper: &mut Dumper<E, S>, repo: &E) -> Result<()>
where
    E: HostedRecord,
    S: WriteSink,
{
    dumper.dump(repo.owner())?;
    dumper.emit(repo)?;
    dumper.dump(repo.issues())?;
    dumper.dump(repo.pull_requests())
}

fn expand_user<E, S>(dumper: &mut Dumper<E, S>, user: &E) -> Result<()>
where
    E: HostedRecord,
    S: WriteSink,
{
    dumper.emit(user)
}

fn expand_issue<E, S>(dumper: &mut Dumper<E, S>, issue: &E) -> Result<()>
where
    E: HostedRecord,
    S: WriteSink,
{
    dumper.dump(issue.repository())?;
    dumper.dump(issue.user())?;
    dumper.emit(issue)?;
    dumper.dump(issue.comments())
}

fn expand_issue_comment<E, S>(dumper: &mut Dumper<E, S>, comment: &E) -> Result<()>
where
    E: HostedRecord,
    S: WriteSink,
{
    dumper.dump(comment.issue())?;
    dumper.dump(comment.user())?;
    dumper.emit(comment)
}

fn expand_pull_request<E, S>(dumper: &mut Dumper<E, S>, pull: &E) -> Result<()>
where
    E: HostedRecord,
    S: WriteSink,
{
    dumper.dump(pull.repository())?;
    dumper.dump(pull.user())?;
    dumper.emit(pull)?;
    dumper.dump(pull.review_comments())
}

fn expand_review_comment<E, S>(dumper: &mut Dumper<E, S>, comment: &E) -> Result<()>
where
    E: HostedRecord,
    S: WriteSink,
{
    dumper.dump(comment.pull_request())?;
    dumper.dump(comment.user())?;
    dumper.emit(comment)
}
