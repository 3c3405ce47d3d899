//! In-memory store used by the core's unit tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::project_ref::ProjectRef;
use crate::roles::ParticipantRole;
use crate::store::{
    InboxMessage, Message, MessageStore, NewApproval, NewMessage, NewProject, ProgressUpdate,
    Project, ProjectApproval, ProjectStore, StatusUpdate, ThreadMessage,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    next_id: DbId,
    projects: BTreeMap<DbId, Project>,
    approvals: Vec<ProjectApproval>,
    messages: BTreeMap<DbId, Message>,
    students: HashMap<DbId, String>,
    mentors: HashMap<DbId, String>,
    fail_approval_inserts: bool,
    fail_message_lookups: bool,
}

impl State {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn resolve(&self, reference: ProjectRef) -> Option<DbId> {
        self.projects
            .values()
            .find(|p| match reference {
                ProjectRef::Id(id) => p.id == id,
                ProjectRef::Code(code) => p.project_code == code,
            })
            .map(|p| p.id)
    }

    fn enrich(&self, message: &Message) -> ThreadMessage {
        let names = match message.sender_type {
            ParticipantRole::Student => &self.students,
            ParticipantRole::Mentor => &self.mentors,
        };
        ThreadMessage {
            message: message.clone(),
            sender_name: names.get(&message.sender_id).cloned(),
        }
    }

    fn participates(project: &Project, role: ParticipantRole, user_id: DbId) -> bool {
        match role {
            ParticipantRole::Student => project.student_id == user_id,
            ParticipantRole::Mentor => project.mentor_id == user_id,
        }
    }
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store lock poisoned")
    }

    pub fn add_student(&self, id: DbId, name: &str) {
        self.lock().students.insert(id, name.to_string());
    }

    pub fn add_mentor(&self, id: DbId, name: &str) {
        self.lock().mentors.insert(id, name.to_string());
    }

    pub fn project(&self, id: DbId) -> Option<Project> {
        self.lock().projects.get(&id).cloned()
    }

    pub fn approvals(&self) -> Vec<ProjectApproval> {
        self.lock().approvals.clone()
    }

    pub fn message_count(&self) -> usize {
        self.lock().messages.len()
    }

    pub fn fail_approval_inserts(&self) {
        self.lock().fail_approval_inserts = true;
    }

    pub fn fail_message_lookups(&self) {
        self.lock().fail_message_lookups = true;
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn max_project_number(&self) -> CoreResult<Option<i64>> {
        Ok(self
            .lock()
            .projects
            .values()
            .map(|p| p.project_code.number())
            .max())
    }

    async fn insert_project(&self, input: &NewProject) -> CoreResult<Project> {
        let mut state = self.lock();
        if state
            .projects
            .values()
            .any(|p| p.project_code == input.project_code)
        {
            return Err(CoreError::Conflict(format!(
                "Duplicate project code {}",
                input.project_code
            )));
        }
        let id = state.allocate_id();
        let project = Project {
            id,
            project_code: input.project_code,
            title: input.title.clone(),
            description: input.description.clone(),
            student_id: input.student_id,
            mentor_id: input.mentor_id,
            status: input.status,
            progress_percentage: 0,
            mentor_feedback: None,
            github_link: input.github_link.clone(),
            submission_date: input.created_at,
            last_updated: input.created_at,
        };
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn find_project(&self, reference: ProjectRef) -> CoreResult<Option<Project>> {
        let state = self.lock();
        Ok(state
            .resolve(reference)
            .and_then(|id| state.projects.get(&id).cloned()))
    }

    async fn update_status(
        &self,
        reference: ProjectRef,
        update: &StatusUpdate,
    ) -> CoreResult<Option<Project>> {
        let mut state = self.lock();
        let Some(id) = state.resolve(reference) else {
            return Ok(None);
        };
        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };
        if update.mentor_id.is_some_and(|m| m != project.mentor_id) {
            return Ok(None);
        }
        project.status = update.status;
        project.mentor_feedback = update.feedback.clone();
        project.last_updated = update.at;
        Ok(Some(project.clone()))
    }

    async fn update_progress(
        &self,
        reference: ProjectRef,
        update: &ProgressUpdate,
    ) -> CoreResult<Option<Project>> {
        let mut state = self.lock();
        let Some(id) = state.resolve(reference) else {
            return Ok(None);
        };
        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };
        project.progress_percentage = update.progress_percentage;
        if let Some(status) = update.status {
            project.status = status;
        }
        project.last_updated = update.at;
        Ok(Some(project.clone()))
    }

    async fn update_github_link(&self, id: DbId, link: &str, at: Timestamp) -> CoreResult<bool> {
        let mut state = self.lock();
        Ok(match state.projects.get_mut(&id) {
            Some(project) => {
                project.github_link = Some(link.to_string());
                project.last_updated = at;
                true
            }
            None => false,
        })
    }

    async fn delete_project(&self, reference: ProjectRef) -> CoreResult<bool> {
        let mut state = self.lock();
        let Some(id) = state.resolve(reference) else {
            return Ok(false);
        };
        state.projects.remove(&id);
        state.messages.retain(|_, m| m.project_id != id);
        state.approvals.retain(|a| a.project_id != id);
        Ok(true)
    }

    async fn insert_approval(&self, input: &NewApproval) -> CoreResult<ProjectApproval> {
        let mut state = self.lock();
        if state.fail_approval_inserts {
            return Err(CoreError::Store("approval table unavailable".into()));
        }
        let approval = ProjectApproval {
            id: state.allocate_id(),
            project_id: input.project_id,
            mentor_id: input.mentor_id,
            approval_date: input.approval_date,
            comments: input.comments.clone(),
        };
        state.approvals.push(approval.clone());
        Ok(approval)
    }

    async fn list_approvals(&self, project_id: DbId) -> CoreResult<Vec<ProjectApproval>> {
        let state = self.lock();
        let mut rows: Vec<_> = state
            .approvals
            .iter()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect();
        rows.sort_by_key(|a| std::cmp::Reverse((a.approval_date, a.id)));
        Ok(rows)
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn insert_message(&self, input: &NewMessage) -> CoreResult<Message> {
        let mut state = self.lock();
        let message = Message {
            id: state.allocate_id(),
            project_id: input.project_id,
            sender_type: input.sender_type,
            sender_id: input.sender_id,
            message_text: input.message_text.clone(),
            sent_at: input.sent_at,
            is_read: false,
        };
        state.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn find_thread_message(&self, id: DbId) -> CoreResult<Option<ThreadMessage>> {
        let state = self.lock();
        if state.fail_message_lookups {
            return Err(CoreError::Store("sender lookup failed".into()));
        }
        Ok(state.messages.get(&id).map(|m| state.enrich(m)))
    }

    async fn list_thread(&self, project_id: DbId) -> CoreResult<Vec<ThreadMessage>> {
        let state = self.lock();
        Ok(state
            .messages
            .values()
            .filter(|m| m.project_id == project_id)
            .map(|m| state.enrich(m))
            .collect())
    }

    async fn list_for_participant(
        &self,
        role: ParticipantRole,
        user_id: DbId,
    ) -> CoreResult<Vec<InboxMessage>> {
        let state = self.lock();
        Ok(state
            .messages
            .values()
            .filter_map(|m| {
                let project = state.projects.get(&m.project_id)?;
                State::participates(project, role, user_id).then(|| InboxMessage {
                    message: state.enrich(m),
                    project_code: project.project_code,
                    project_title: project.title.clone(),
                })
            })
            .collect())
    }

    async fn count_unread(&self, role: ParticipantRole, user_id: DbId) -> CoreResult<i64> {
        let state = self.lock();
        let count = state
            .messages
            .values()
            .filter(|m| !m.is_read && m.sender_type != role)
            .filter(|m| {
                state
                    .projects
                    .get(&m.project_id)
                    .is_some_and(|p| State::participates(p, role, user_id))
            })
            .count();
        Ok(count as i64)
    }

    async fn mark_read(&self, project_id: DbId, reader: ParticipantRole) -> CoreResult<u64> {
        let mut state = self.lock();
        let mut changed = 0;
        for message in state.messages.values_mut() {
            if message.project_id == project_id && message.sender_type != reader && !message.is_read
            {
                message.is_read = true;
                changed += 1;
            }
        }
        Ok(changed)
    }
}
