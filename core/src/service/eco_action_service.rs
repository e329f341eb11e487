use crate::model::community::{seed_actions, EcoAction};
use crate::repository::JoinedActionRepository;
use crate::service::dto::EcoActionView;
use anyhow::Result;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum CommunityError {
    #[error("no eco action with id {0}")]
    UnknownAction(u32),
}

/// Community eco actions and the local user's sign-ups.
pub struct EcoActionService<R: JoinedActionRepository> {
    joined: R,
    actions: Vec<EcoAction>,
}

impl<R: JoinedActionRepository> EcoActionService<R> {
    pub fn new(joined: R) -> Self {
        Self::with_actions(joined, seed_actions())
    }

    pub fn with_actions(joined: R, actions: Vec<EcoAction>) -> Self {
        Self { joined, actions }
    }

    pub fn list(&self) -> Result<Vec<EcoActionView>> {
        let joined = self.joined.list()?;
        Ok(self
            .actions
            .iter()
            .map(|action| {
                let is_joined = joined.contains(&action.id);
                EcoActionView {
                    participants: action.participants + u32::from(is_joined),
                    joined: is_joined,
                    action: action.clone(),
                }
            })
            .collect())
    }

    /// Signs up for `id`. Joining twice is a no-op that returns the same view.
    pub fn join(&self, id: u32) -> Result<EcoActionView> {
        let action = self
            .actions
            .iter()
            .find(|a| a.id == id)
            .ok_or(CommunityError::UnknownAction(id))?;

        if self.joined.add(id)? {
            info!(id, title = %action.title, "joined eco action");
        }

        Ok(EcoActionView {
            action: action.clone(),
            joined: true,
            participants: action.participants + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryKeyValueStore, StoreJoinedActionRepository};

    #[test]
    fn test_list_before_joining() {
        let store = MemoryKeyValueStore::new();
        let service = EcoActionService::new(StoreJoinedActionRepository::new(&store));

        let views = service.list().unwrap();
        assert_eq!(views.len(), 4);
        assert!(views.iter().all(|v| !v.joined));
        assert_eq!(views[0].participants, 45);
    }

    #[test]
    fn test_join_marks_action_and_counts_user_once() {
        let store = MemoryKeyValueStore::new();
        let service = EcoActionService::new(StoreJoinedActionRepository::new(&store));

        let view = service.join(2).unwrap();
        assert!(view.joined);
        assert_eq!(view.participants, 33);

        service.join(2).unwrap();
        let views = service.list().unwrap();
        let beach = views.iter().find(|v| v.action.id == 2).unwrap();
        assert!(beach.joined);
        assert_eq!(beach.participants, 33);
        assert_eq!(views.iter().filter(|v| v.joined).count(), 1);
    }

    #[test]
    fn test_join_unknown_action() {
        let store = MemoryKeyValueStore::new();
        let service = EcoActionService::new(StoreJoinedActionRepository::new(&store));

        let err = service.join(99).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CommunityError>(),
            Some(&CommunityError::UnknownAction(99))
        );
    }
}
