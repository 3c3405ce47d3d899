//! Project lifecycle manager.
//!
//! Owns every mutation of a project's status, feedback, progress and GitHub
//! link. Status values are parsed into [`ProjectStatus`] on entry so an
//! invalid value never reaches the store.
//!
//! Approving a project is a two-phase write: the status update is one
//! statement, the [`ProjectApproval`] audit insert is a second one. The audit
//! insert is best-effort. If it fails the failure is logged and the status
//! change still stands. Two concurrent approvals of the same project each
//! write their own audit row; nothing deduplicates them.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::project_ref::{ProjectCode, ProjectRef};
use crate::project_status::{validate_progress, ProjectStatus};
use crate::store::{
    NewApproval, NewProject, ProgressUpdate, Project, ProjectApproval, ProjectStore, StatusUpdate,
};
use crate::types::{self, DbId, Timestamp};

/// Entity name used in not-found errors.
const PROJECT: &str = "Project";

/// Raw proposal fields as received from a client. Presence is checked by
/// [`ProjectLifecycle::submit`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectProposal {
    pub title: Option<String>,
    pub description: Option<String>,
    pub student_id: Option<DbId>,
    pub mentor_id: Option<DbId>,
    pub github_link: Option<String>,
}

/// How a project enters the system, which decides its initial status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intake {
    /// A proposal filed through the generic projects endpoint.
    Proposal,
    /// A submission filed by the student through the student endpoint.
    StudentSubmission,
}

impl Intake {
    pub fn initial_status(&self) -> ProjectStatus {
        match self {
            Self::Proposal => ProjectStatus::Pending,
            Self::StudentSubmission => ProjectStatus::Submitted,
        }
    }
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct StatusChanged {
    pub project: Project,
    /// Human-readable confirmation, e.g. `Project approved successfully`.
    pub message: String,
    pub updated_at: Timestamp,
}

/// Lifecycle operations over an injected [`ProjectStore`].
pub struct ProjectLifecycle<S> {
    store: S,
}

impl<S: ProjectStore> ProjectLifecycle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a project from a proposal, allocating the next project code.
    pub async fn submit(&self, proposal: ProjectProposal, intake: Intake) -> CoreResult<Project> {
        let title = proposal
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let (Some(title), Some(student_id), Some(mentor_id)) =
            (title, proposal.student_id, proposal.mentor_id)
        else {
            return Err(CoreError::Validation(
                "Missing required project information: title, student_id and mentor_id are required"
                    .into(),
            ));
        };

        let project_code = ProjectCode::next_after(self.store.max_project_number().await?)?;
        let input = NewProject {
            project_code,
            title,
            description: proposal.description,
            student_id,
            mentor_id,
            status: intake.initial_status(),
            github_link: proposal.github_link.filter(|l| !l.trim().is_empty()),
            created_at: types::now(),
        };

        let project = self.store.insert_project(&input).await?;

        tracing::info!(
            project_id = project.id,
            project_code = %project.project_code,
            student_id,
            mentor_id,
            status = %project.status,
            "Project submitted"
        );

        Ok(project)
    }

    /// Resolve a reference to a project.
    pub async fn get(&self, reference: ProjectRef) -> CoreResult<Project> {
        self.store
            .find_project(reference)
            .await?
            .ok_or_else(|| CoreError::not_found(PROJECT, reference))
    }

    /// Move a project to `status` and record `feedback`.
    ///
    /// With `scope_mentor` set, only a project assigned to that mentor is
    /// updated; any other project reports not found. Approvals also append an
    /// audit row (best-effort, see module docs).
    pub async fn set_status(
        &self,
        reference: ProjectRef,
        status: &str,
        feedback: Option<String>,
        scope_mentor: Option<DbId>,
    ) -> CoreResult<StatusChanged> {
        let status = ProjectStatus::from_str(status)?;
        let now = types::now();

        let update = StatusUpdate {
            status,
            feedback: feedback.clone(),
            mentor_id: scope_mentor,
            at: now,
        };
        let project = self
            .store
            .update_status(reference, &update)
            .await?
            .ok_or_else(|| match scope_mentor {
                Some(mentor_id) => CoreError::not_found(
                    PROJECT,
                    format!("{reference} (not assigned to mentor {mentor_id})"),
                ),
                None => CoreError::not_found(PROJECT, reference),
            })?;

        tracing::info!(
            project_id = project.id,
            status = %status,
            mentor_id = ?scope_mentor,
            "Project status updated"
        );

        if status == ProjectStatus::Approved {
            self.record_approval(&project, feedback, now).await;
        }

        Ok(StatusChanged {
            message: format!("Project {} successfully", status.confirmation_verb()),
            updated_at: project.last_updated,
            project,
        })
    }

    /// Second phase of an approval. Never fails the caller.
    async fn record_approval(&self, project: &Project, comments: Option<String>, at: Timestamp) {
        let approval = NewApproval {
            project_id: project.id,
            mentor_id: project.mentor_id,
            approval_date: at,
            comments,
        };
        match self.store.insert_approval(&approval).await {
            Ok(row) => tracing::debug!(
                approval_id = row.id,
                project_id = project.id,
                "Project approval recorded"
            ),
            Err(err) => tracing::error!(
                error = %err,
                project_id = project.id,
                mentor_id = project.mentor_id,
                "Failed to record project approval"
            ),
        }
    }

    /// Set the progress percentage, optionally changing status as well.
    pub async fn set_progress(
        &self,
        reference: ProjectRef,
        progress: Option<i32>,
        status: Option<&str>,
    ) -> CoreResult<Project> {
        let progress = progress.ok_or_else(|| {
            CoreError::Validation("progress_percentage is required".into())
        })?;
        let progress = validate_progress(progress)?;
        let status = status.map(ProjectStatus::from_str).transpose()?;

        let update = ProgressUpdate {
            progress_percentage: progress,
            status,
            at: types::now(),
        };
        let project = self
            .store
            .update_progress(reference, &update)
            .await?
            .ok_or_else(|| CoreError::not_found(PROJECT, reference))?;

        tracing::info!(
            project_id = project.id,
            progress,
            status = ?status,
            "Project progress updated"
        );

        Ok(project)
    }

    /// Replace the project's GitHub link.
    ///
    /// `owner_claim` is the student id asserted by the caller on the student
    /// path; when present it must equal the project's owner. The admin path
    /// passes `None`.
    pub async fn update_github_link(
        &self,
        reference: ProjectRef,
        link: Option<&str>,
        owner_claim: Option<DbId>,
    ) -> CoreResult<Timestamp> {
        let link = link
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| CoreError::Validation("GitHub link is required".into()))?;

        let project = self.get(reference).await?;

        if let Some(claimed) = owner_claim {
            if project.student_id != claimed {
                tracing::warn!(
                    project_id = project.id,
                    claimed_student = claimed,
                    "GitHub link update rejected: caller does not own project"
                );
                return Err(CoreError::Forbidden(
                    "You do not have permission to update this project".into(),
                ));
            }
        }

        let now = types::now();
        if !self.store.update_github_link(project.id, link, now).await? {
            return Err(CoreError::not_found(PROJECT, reference));
        }

        tracing::info!(project_id = project.id, "Project GitHub link updated");
        Ok(now)
    }

    pub async fn delete(&self, reference: ProjectRef) -> CoreResult<()> {
        if !self.store.delete_project(reference).await? {
            return Err(CoreError::not_found(PROJECT, reference));
        }
        tracing::info!(project = %reference, "Project deleted");
        Ok(())
    }

    /// Approval audit trail of a project, newest first.
    pub async fn approvals(&self, reference: ProjectRef) -> CoreResult<Vec<ProjectApproval>> {
        let project = self.get(reference).await?;
        self.store.list_approvals(project.id).await
    }
}
