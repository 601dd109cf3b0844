mod common;

use actor_framework::ActorClient;
use async_trait::async_trait;
use common::{item, mock_session, statuses};
use krazz_client::api::{ApiCall, ApiError, MockOrderApi, OrderApi};
use krazz_client::clients::CartClient;
use krazz_client::model::{
    CreatedOrder, MenuVariant, NewOrder, NewOrderLine, OrderId, OrderKind, OrderScope,
    OrderStatus, OrderSummary, PaymentMethod, PaymentMethodId, Role, StatusId, StatusName,
    VariantId,
};
use krazz_client::workflows::{OrderPlacement, PlacedOrder, PlacementError, PlacementRequest};
use rust_decimal::Decimal;
use std::sync::Arc;
use testresult::TestResult;

/// A backend during whose line uploads the user keeps shopping.
struct BusyShopper {
    mock: Arc<MockOrderApi>,
    cart: CartClient,
}

#[async_trait]
impl OrderApi for BusyShopper {
    async fn list_orders(&self, scope: OrderScope) -> Result<Vec<OrderSummary>, ApiError> {
        self.mock.list_orders(scope).await
    }
    async fn statuses(&self) -> Result<Vec<OrderStatus>, ApiError> {
        self.mock.statuses().await
    }
    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.mock.payment_methods().await
    }
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError> {
        self.mock.create_order(order).await
    }
    async fn add_line(&self, line: &NewOrderLine) -> Result<(), ApiError> {
        self.cart
            .add(item(3, 700, 5), 1)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.mock.add_line(line).await
    }
    async fn set_status(&self, order: OrderId, status: StatusId) -> Result<(), ApiError> {
        self.mock.set_status(order, status).await
    }
    async fn menu(&self) -> Result<Vec<MenuVariant>, ApiError> {
        self.mock.menu().await
    }
}

#[tokio::test]
async fn test_customer_checkout_creates_order_then_clears_cart() -> TestResult {
    let (session, api) = mock_session(Role::Customer);
    session.cart.add(item(1, 1000, 5), 2).await?;
    session.cart.add(item(2, 500, 5), 1).await?;

    api.expect_statuses().return_ok(statuses());
    api.expect_create_order().return_ok(CreatedOrder { id: OrderId(77) });
    api.expect_add_line().return_ok(());
    api.expect_add_line().return_ok(());

    let placed = session
        .place_order(PlacementRequest::customer(
            Some(PaymentMethodId(2)),
            Some("sin azucar".to_string()),
        ))
        .await?;

    assert_eq!(placed, PlacedOrder { order_id: OrderId(77), lines: 2 });
    assert!(session.cart.total().await?.is_zero());

    let calls = api.calls();
    assert_eq!(calls.len(), 4);
    match &calls[1] {
        ApiCall::CreateOrder(order) => {
            assert_eq!(order.metodo_pago_id, PaymentMethodId(2));
            assert_eq!(order.estado_id, StatusId(1));
            assert_eq!(order.tipo, Some(OrderKind::External));
            assert_eq!(order.notas.as_deref(), Some("sin azucar"));
        }
        other => panic!("Expected CreateOrder, got {other:?}"),
    }
    match &calls[2] {
        ApiCall::AddLine(line) => {
            assert_eq!(line.pedido_id, OrderId(77));
            assert_eq!(line.variante_id, VariantId(1));
            assert_eq!(line.cantidad, 2);
            assert_eq!(line.precio_unitario, Decimal::from(1000));
        }
        other => panic!("Expected AddLine, got {other:?}"),
    }
    api.verify();
    assert_eq!(session.shutdown().await, Ok(()));
    Ok(())
}

#[tokio::test]
async fn test_line_added_during_submission_stays_in_cart() -> TestResult {
    let (session, api) = mock_session(Role::Customer);
    session.cart.add(item(1, 1000, 5), 2).await?;
    api.expect_statuses().return_ok(statuses());
    api.expect_create_order().return_ok(CreatedOrder { id: OrderId(81) });
    api.expect_add_line().return_ok(());

    let backend = Arc::new(BusyShopper {
        mock: Arc::clone(&api),
        cart: session.cart.clone(),
    });
    let placement = OrderPlacement::new(session.cart.clone(), backend);
    let placed = placement
        .place(PlacementRequest::customer(Some(PaymentMethodId(1)), None))
        .await?;

    assert_eq!(placed, PlacedOrder { order_id: OrderId(81), lines: 1 });
    let cart = session.cart.snapshot().await?;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].item.variant_id, VariantId(3));
    assert_eq!(session.cart.total().await?, Decimal::from(700));
    api.verify();
    Ok(())
}

#[tokio::test]
async fn test_missing_payment_method_is_caught_before_any_request() -> TestResult {
    let (session, api) = mock_session(Role::Customer);
    session.cart.add(item(1, 1000, 5), 1).await?;

    let result = session.place_order(PlacementRequest::customer(None, None)).await;

    assert_eq!(result, Err(PlacementError::MissingPaymentMethod));
    assert!(api.calls().is_empty());
    assert_eq!(session.cart.total().await?, Decimal::from(1000));
    assert_eq!(session.shutdown().await, Ok(()));
    Ok(())
}

#[tokio::test]
async fn test_empty_cart_is_rejected_locally() -> TestResult {
    let (session, api) = mock_session(Role::Customer);

    let result = session
        .place_order(PlacementRequest::customer(Some(PaymentMethodId(1)), None))
        .await;

    assert_eq!(result, Err(PlacementError::EmptyCart));
    assert!(api.calls().is_empty());
    assert_eq!(session.shutdown().await, Ok(()));
    Ok(())
}

#[tokio::test]
async fn test_rejected_line_reports_order_and_keeps_cart() -> TestResult {
    let (session, api) = mock_session(Role::Customer);
    session.cart.add(item(1, 1000, 5), 2).await?;
    session.cart.add(item(2, 500, 5), 1).await?;

    let rejection = ApiError::Rejected {
        status: 400,
        message: "{\"cantidad\":[\"Stock insuficiente\"]}".to_string(),
    };
    api.expect_statuses().return_ok(statuses());
    api.expect_create_order().return_ok(CreatedOrder { id: OrderId(78) });
    api.expect_add_line().return_ok(());
    api.expect_add_line().return_err(rejection.clone());

    let result = session
        .place_order(PlacementRequest::customer(Some(PaymentMethodId(1)), None))
        .await;

    assert_eq!(
        result,
        Err(PlacementError::LineRejected {
            order_id: OrderId(78),
            source: rejection
        })
    );
    assert_eq!(session.cart.snapshot().await?.len(), 2);
    assert_eq!(session.cart.total().await?, Decimal::from(2500));
    api.verify();
    Ok(())
}

#[tokio::test]
async fn test_rejected_order_leaves_cart_untouched() -> TestResult {
    let (session, api) = mock_session(Role::Customer);
    session.cart.add(item(1, 1000, 5), 1).await?;

    api.expect_statuses().return_ok(statuses());
    api.expect_create_order().return_err(ApiError::Timeout);

    let result = session
        .place_order(PlacementRequest::customer(Some(PaymentMethodId(1)), None))
        .await;

    assert_eq!(result, Err(PlacementError::Api(ApiError::Timeout)));
    assert_eq!(session.cart.total().await?, Decimal::from(1000));
    api.verify();
    Ok(())
}

#[tokio::test]
async fn test_waiter_order_carries_table_and_chosen_status() -> TestResult {
    let (session, api) = mock_session(Role::Waiter);
    session.cart.add(item(4, 1200, 10), 3).await?;

    api.expect_statuses().return_ok(statuses());
    api.expect_create_order().return_ok(CreatedOrder { id: OrderId(90) });
    api.expect_add_line().return_ok(());

    let mut request = PlacementRequest::waiter(Some(PaymentMethodId(1)), 6, Some(12));
    request.status = Some(StatusName::new("en cocina"));
    session.place_order(request).await?;

    match &api.calls()[1] {
        ApiCall::CreateOrder(order) => {
            assert_eq!(order.estado_id, StatusId(2));
            assert_eq!(order.mesa, Some(6));
            assert_eq!(order.empleado, Some(12));
            assert_eq!(order.tipo, None);
        }
        other => panic!("Expected CreateOrder, got {other:?}"),
    }
    api.verify();
    Ok(())
}

#[tokio::test]
async fn test_unknown_initial_status_stops_before_creating() -> TestResult {
    let (session, api) = mock_session(Role::Waiter);
    session.cart.add(item(4, 1200, 10), 1).await?;
    api.expect_statuses().return_ok(statuses());

    let mut request = PlacementRequest::waiter(Some(PaymentMethodId(1)), 2, None);
    request.status = Some(StatusName::new("Archivado"));
    let result = session.place_order(request).await;

    assert_eq!(
        result,
        Err(PlacementError::MissingStatus(StatusName::new("Archivado")))
    );
    assert_eq!(api.calls(), vec![ApiCall::Statuses]);
    Ok(())
}
