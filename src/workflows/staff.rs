//! Manual, forward-only status transitions driven by waiters and the kitchen.

use crate::api::{ApiError, OrderApi};
use crate::clients::BoardClient;
use crate::model::{OrderId, OrderSummary, Role, StatusCatalog, StatusName};
use async_trait::async_trait;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    StartPreparing,
    MarkReady,
    Deliver,
    Cancel,
}

impl Transition {
    pub fn target(self) -> &'static str {
        match self {
            Transition::StartPreparing => StatusName::IN_KITCHEN,
            Transition::MarkReady => StatusName::READY,
            Transition::Deliver => StatusName::DELIVERED,
            Transition::Cancel => StatusName::CANCELLED,
        }
    }

    /// Statuses the transition may start from.
    pub fn allowed_from(self) -> &'static [&'static str] {
        match self {
            Transition::StartPreparing => &[StatusName::PENDING],
            Transition::MarkReady => &[StatusName::IN_KITCHEN],
            Transition::Deliver => &[StatusName::READY],
            Transition::Cancel => &[StatusName::PENDING, StatusName::READY],
        }
    }

    pub fn permitted_for(self, role: Role) -> bool {
        match role {
            Role::Kitchen => matches!(self, Transition::StartPreparing | Transition::MarkReady),
            Role::Waiter => matches!(self, Transition::Deliver | Transition::Cancel),
            Role::Customer => false,
        }
    }

    pub fn applies_to(self, status: &StatusName) -> bool {
        self.allowed_from().iter().any(|from| status.is(from))
    }

    /// The kitchen's single forward step from `status`, if any.
    pub fn next_for_kitchen(status: &StatusName) -> Option<Self> {
        [Transition::StartPreparing, Transition::MarkReady]
            .into_iter()
            .find(|transition| transition.applies_to(status))
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-> {}", self.target())
    }
}

/// Asks the operator to confirm a state-changing request.
#[async_trait]
pub trait Confirmation: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything. For unattended use and tests.
pub struct AlwaysConfirm;

#[async_trait]
impl Confirmation for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaffError {
    #[error("{role} may not {transition:?}")]
    NotPermitted { role: Role, transition: Transition },

    #[error("Order {order_id} is {status}, cannot apply {transition}")]
    InvalidTransition {
        order_id: OrderId,
        status: StatusName,
        transition: Transition,
    },

    #[error("Unknown order status: {0}")]
    MissingStatus(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// Accepted by the backend. `refreshed` is false when the follow-up board fetch
    /// failed; the board then shows the old status until the next poll.
    Applied {
        order_id: OrderId,
        status: StatusName,
        refreshed: bool,
    },
    /// The operator declined; nothing was sent.
    Declined,
}

pub struct StaffDesk {
    role: Role,
    api: Arc<dyn OrderApi>,
    board: BoardClient,
    confirmer: Arc<dyn Confirmation>,
}

impl StaffDesk {
    pub fn new(
        role: Role,
        api: Arc<dyn OrderApi>,
        board: BoardClient,
        confirmer: Arc<dyn Confirmation>,
    ) -> Self {
        Self {
            role,
            api,
            board,
            confirmer,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    #[instrument(skip(self, order), fields(role = %self.role, order_id = %order.id, transition = %transition))]
    pub async fn apply(
        &self,
        order: &OrderSummary,
        transition: Transition,
    ) -> Result<TransitionOutcome, StaffError> {
        if !transition.permitted_for(self.role) {
            return Err(StaffError::NotPermitted {
                role: self.role,
                transition,
            });
        }
        if !transition.applies_to(order.status_name()) {
            return Err(StaffError::InvalidTransition {
                order_id: order.id,
                status: order.status_name().clone(),
                transition,
            });
        }

        let catalog = StatusCatalog::new(self.api.statuses().await?);
        let target = transition.target();
        let status_id = catalog
            .id_of(target)
            .ok_or_else(|| StaffError::MissingStatus(target.to_string()))?;

        let prompt = format!("Change order {} to \"{target}\"?", order.id);
        if !self.confirmer.confirm(&prompt).await {
            info!("Transition declined");
            return Ok(TransitionOutcome::Declined);
        }

        self.api.set_status(order.id, status_id).await?;
        let mut refreshed = true;
        for scope in self.role.poll_scopes() {
            if let Err(error) = self.board.refresh(scope).await {
                warn!(%scope, %error, "Board refresh after transition failed");
                refreshed = false;
            }
        }
        info!(refreshed, "Transition applied");
        Ok(TransitionOutcome::Applied {
            order_id: order.id,
            status: StatusName::new(target),
            refreshed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(name: &str) -> StatusName {
        StatusName::new(name)
    }

    #[test]
    fn test_kitchen_moves_forward_only() {
        assert_eq!(
            Transition::next_for_kitchen(&status("Pendiente")),
            Some(Transition::StartPreparing)
        );
        assert_eq!(
            Transition::next_for_kitchen(&status("en cocina")),
            Some(Transition::MarkReady)
        );
        assert_eq!(Transition::next_for_kitchen(&status("Listo")), None);
        assert_eq!(Transition::next_for_kitchen(&status("Cancelado")), None);
    }

    #[test]
    fn test_cancel_sources() {
        assert!(Transition::Cancel.applies_to(&status("Pendiente")));
        assert!(Transition::Cancel.applies_to(&status("Listo")));
        assert!(!Transition::Cancel.applies_to(&status("En cocina")));
        assert!(!Transition::Cancel.applies_to(&status("Entregado")));
    }

    #[test]
    fn test_role_permissions() {
        assert!(Transition::MarkReady.permitted_for(Role::Kitchen));
        assert!(!Transition::Deliver.permitted_for(Role::Kitchen));
        assert!(Transition::Deliver.permitted_for(Role::Waiter));
        assert!(!Transition::StartPreparing.permitted_for(Role::Waiter));
        assert!(!Transition::Cancel.permitted_for(Role::Customer));
    }
}
