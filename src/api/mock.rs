//! Scripted [`OrderApi`] for tests.
//!
//! Expectations are consumed in order. A call that does not match the next
//! expectation panics, like the actor mocks do.

use super::error::ApiError;
use super::orders::OrderApi;
use crate::model::{
    CreatedOrder, MenuVariant, NewOrder, NewOrderLine, OrderId, OrderScope, OrderStatus,
    OrderSummary, PaymentMethod, StatusId,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// A call as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListOrders(OrderScope),
    Statuses,
    PaymentMethods,
    CreateOrder(NewOrder),
    AddLine(NewOrderLine),
    SetStatus(OrderId, StatusId),
    Menu,
}

#[derive(Debug)]
enum Expectation {
    ListOrders(OrderScope, Result<Vec<OrderSummary>, ApiError>),
    Statuses(Result<Vec<OrderStatus>, ApiError>),
    PaymentMethods(Result<Vec<PaymentMethod>, ApiError>),
    CreateOrder(Result<CreatedOrder, ApiError>),
    AddLine(Result<(), ApiError>),
    SetStatus(Result<(), ApiError>),
    Menu(Result<Vec<MenuVariant>, ApiError>),
}

#[derive(Default)]
pub struct MockOrderApi {
    expectations: Mutex<VecDeque<Expectation>>,
    calls: Mutex<Vec<ApiCall>>,
}

/// Completes an expectation with its outcome.
pub struct Respond<'a, R> {
    mock: &'a MockOrderApi,
    wrap: Box<dyn FnOnce(Result<R, ApiError>) -> Expectation + 'a>,
}

impl<R> Respond<'_, R> {
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.mock.push(expectation);
    }

    pub fn return_err(self, error: ApiError) {
        let expectation = (self.wrap)(Err(error));
        self.mock.push(expectation);
    }
}

impl MockOrderApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, expectation: Expectation) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(expectation);
    }

    fn respond<R>(&self, wrap: impl FnOnce(Result<R, ApiError>) -> Expectation + 'static) -> Respond<'_, R> {
        Respond {
            mock: self,
            wrap: Box::new(wrap),
        }
    }

    pub fn expect_list_orders(&self, scope: OrderScope) -> Respond<'_, Vec<OrderSummary>> {
        self.respond(move |result| Expectation::ListOrders(scope, result))
    }

    pub fn expect_statuses(&self) -> Respond<'_, Vec<OrderStatus>> {
        self.respond(Expectation::Statuses)
    }

    pub fn expect_payment_methods(&self) -> Respond<'_, Vec<PaymentMethod>> {
        self.respond(Expectation::PaymentMethods)
    }

    pub fn expect_create_order(&self) -> Respond<'_, CreatedOrder> {
        self.respond(Expectation::CreateOrder)
    }

    pub fn expect_add_line(&self) -> Respond<'_, ()> {
        self.respond(Expectation::AddLine)
    }

    pub fn expect_set_status(&self) -> Respond<'_, ()> {
        self.respond(Expectation::SetStatus)
    }

    pub fn expect_menu(&self) -> Respond<'_, Vec<MenuVariant>> {
        self.respond(Expectation::Menu)
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap_or_else(PoisonError::into_inner);
        assert!(
            remaining.is_empty(),
            "Not all expectations were met. Remaining: {:?}",
            *remaining
        );
    }

    fn next(&self, call: ApiCall) -> Expectation {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call.clone());
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected call: {call:?}"))
    }
}

fn mismatch(call: &str, expectation: Expectation) -> ! {
    panic!("Unexpected call: {call}, expected: {expectation:?}")
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn list_orders(&self, scope: OrderScope) -> Result<Vec<OrderSummary>, ApiError> {
        match self.next(ApiCall::ListOrders(scope)) {
            Expectation::ListOrders(expected, result) if expected == scope => result,
            other => mismatch(&format!("list_orders({scope})"), other),
        }
    }

    async fn statuses(&self) -> Result<Vec<OrderStatus>, ApiError> {
        match self.next(ApiCall::Statuses) {
            Expectation::Statuses(result) => result,
            other => mismatch("statuses", other),
        }
    }

    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        match self.next(ApiCall::PaymentMethods) {
            Expectation::PaymentMethods(result) => result,
            other => mismatch("payment_methods", other),
        }
    }

    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError> {
        match self.next(ApiCall::CreateOrder(order.clone())) {
            Expectation::CreateOrder(result) => result,
            other => mismatch("create_order", other),
        }
    }

    async fn add_line(&self, line: &NewOrderLine) -> Result<(), ApiError> {
        match self.next(ApiCall::AddLine(line.clone())) {
            Expectation::AddLine(result) => result,
            other => mismatch("add_line", other),
        }
    }

    async fn set_status(&self, order: OrderId, status: StatusId) -> Result<(), ApiError> {
        match self.next(ApiCall::SetStatus(order, status)) {
            Expectation::SetStatus(result) => result,
            other => mismatch("set_status", other),
        }
    }

    async fn menu(&self) -> Result<Vec<MenuVariant>, ApiError> {
        match self.next(ApiCall::Menu) {
            Expectation::Menu(result) => result,
            other => mismatch("menu", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_expectations_are_consumed_in_order() {
        let mock = MockOrderApi::new();
        mock.expect_statuses().return_ok(vec![]);
        mock.expect_set_status().return_err(ApiError::Timeout);

        assert_eq!(mock.statuses().await, Ok(vec![]));
        assert_eq!(
            mock.set_status(OrderId(1), StatusId(3)).await,
            Err(ApiError::Timeout)
        );
        assert_eq!(
            mock.calls(),
            vec![ApiCall::Statuses, ApiCall::SetStatus(OrderId(1), StatusId(3))]
        );
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected call")]
    async fn test_mismatch_panics() {
        let mock = MockOrderApi::new();
        mock.expect_menu().return_ok(vec![]);
        let _ = mock.statuses().await;
    }
}
