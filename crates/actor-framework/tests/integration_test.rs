use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Till {
    balance: u32,
}

#[derive(Debug)]
enum TillAction {
    Deposit(u32),
    Withdraw(u32),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TillError {
    #[error("insufficient funds: {0} available")]
    InsufficientFunds(u32),
}

/// Counts how many actions reached the entity.
type Audit = Arc<AtomicU32>;

#[async_trait]
impl ActorEntity for Till {
    type Action = TillAction;
    type ActionResult = u32;
    type Context = Audit;
    type Error = TillError;

    async fn handle_action(&mut self, action: TillAction, audit: &Audit) -> Result<u32, TillError> {
        audit.fetch_add(1, Ordering::SeqCst);
        match action {
            TillAction::Deposit(amount) => self.balance += amount,
            TillAction::Withdraw(amount) => {
                if amount > self.balance {
                    return Err(TillError::InsufficientFunds(self.balance));
                }
                self.balance -= amount;
            }
        }
        Ok(self.balance)
    }
}

#[tokio::test]
async fn test_actions_apply_in_order_and_snapshot_reflects_them() {
    let audit = Audit::default();
    let (actor, client) = ResourceActor::new(Till::default(), 10);
    tokio::spawn(actor.run(audit.clone()));

    assert_eq!(client.perform_action(TillAction::Deposit(10)).await.unwrap(), 10);
    assert_eq!(client.perform_action(TillAction::Withdraw(4)).await.unwrap(), 6);
    assert_eq!(client.get().await.unwrap(), Till { balance: 6 });
    assert_eq!(audit.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_entity_error_is_typed_and_state_unchanged() {
    let (actor, client) = ResourceActor::new(Till { balance: 3 }, 10);
    tokio::spawn(actor.run(Audit::default()));

    let err = client
        .perform_action(TillAction::Withdraw(5))
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<TillError>().unwrap(),
        TillError::InsufficientFunds(3)
    );
    assert_eq!(client.get().await.unwrap().balance, 3);
}

#[tokio::test]
async fn test_concurrent_writers_are_serialized() {
    let (actor, client) = ResourceActor::new(Till::default(), 64);
    tokio::spawn(actor.run(Audit::default()));

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.perform_action(TillAction::Deposit(2)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(client.get().await.unwrap().balance, 100);
}

#[tokio::test]
async fn test_actor_stops_when_last_client_dropped() {
    let (actor, client) = ResourceActor::new(Till::default(), 10);
    let handle = tokio::spawn(actor.run(Audit::default()));

    let second = client.clone();
    drop(client);
    second.perform_action(TillAction::Deposit(1)).await.unwrap();
    drop(second);

    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::new(Till::default(), 10);
    drop(actor);

    assert!(matches!(client.get().await, Err(FrameworkError::ActorClosed)));
}
