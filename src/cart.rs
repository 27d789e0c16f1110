//! Cart State
//!
//! The single source of truth for the cart view. Components only project
//! this state; every server response is applied to it in one update, so
//! concurrent removals never read a stale badge count.

use reactive_stores::Store;

use crate::commands::ApiError;
use crate::models::{CartItem, CartSnapshot, ItemKey, QuantityAction, QuantityResponse, RemovalResponse};

/// Shown when the server rejects a request without a message
pub const GENERIC_FAILURE: &str = "Could not update your cart. Please try again.";

/// Per-row request state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowStatus {
    #[default]
    Idle,
    /// Request in flight; controls disabled, spinner shown
    Busy,
    /// Server refused the request; controls enabled again
    Failed(String),
    /// Removal confirmed, fading out before the row is dropped
    Fading,
}

impl RowStatus {
    /// Controls are disabled while busy or fading
    pub fn is_locked(&self) -> bool {
        matches!(self, RowStatus::Busy | RowStatus::Fading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RowStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub item: CartItem,
    pub status: RowStatus,
}

/// Rejections of a user action before any request is sent
#[derive(Debug, Clone, PartialEq)]
pub enum CartError {
    UnknownItem(ItemKey),
    Busy(ItemKey),
    AtMinimum(ItemKey),
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartError::UnknownItem(key) => write!(f, "Unknown cart item: {}", key),
            CartError::Busy(key) => write!(f, "Request already in flight: {}", key),
            CartError::AtMinimum(key) => write!(f, "Quantity already at minimum: {}", key),
        }
    }
}

impl std::error::Error for CartError {}

/// What a settled removal request leads to
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// Row is fading; call `complete_removal` with the response once the fade is done
    Fading(RemovalResponse),
    /// Server refused; row shows an error and can be retried
    Rejected,
    /// Transport failure; row is back to idle
    Restored,
}

/// Cart view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    pub rows: Vec<CartRow>,
    /// Badge count; zero means the cart is empty
    pub count: u32,
    /// `None` when the page shows no summary block
    pub subtotal: Option<f64>,
    /// Lowest `cart_count` the server has reported; later responses above it are stale
    pub server_count: Option<u32>,
}

/// `$12.50`
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

impl CartState {
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let count = snapshot.count.unwrap_or(snapshot.items.len() as u32);
        let rows = if count == 0 {
            Vec::new()
        } else {
            snapshot
                .items
                .into_iter()
                .map(|item| CartRow { item, status: RowStatus::Idle })
                .collect()
        };
        Self {
            rows,
            count,
            subtotal: snapshot.subtotal,
            server_count: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Badge value; `None` removes the badge
    pub fn badge(&self) -> Option<u32> {
        (self.count > 0).then_some(self.count)
    }

    pub fn row(&self, key: &ItemKey) -> Option<&CartRow> {
        self.rows.iter().find(|row| row.item.key() == *key)
    }

    fn row_mut(&mut self, key: &ItemKey) -> Option<&mut CartRow> {
        self.rows.iter_mut().find(|row| row.item.key() == *key)
    }

    fn set_status(&mut self, key: &ItemKey, status: RowStatus) {
        if let Some(row) = self.row_mut(key) {
            row.status = status;
        }
    }

    pub fn subtotal_label(&self) -> Option<String> {
        self.subtotal.map(format_money)
    }

    /// Total is always subtotal plus the fixed fee
    pub fn total_label(&self, fee: f64) -> Option<String> {
        self.subtotal.map(|subtotal| format_money(subtotal + fee))
    }

    fn lock_row(&mut self, key: &ItemKey) -> Result<&mut CartRow, CartError> {
        let row = self
            .row_mut(key)
            .ok_or_else(|| CartError::UnknownItem(key.clone()))?;
        if row.status.is_locked() {
            return Err(CartError::Busy(key.clone()));
        }
        Ok(row)
    }

    // ========================
    // Removal
    // ========================

    /// Mark the row busy. Must run before the request is sent.
    pub fn begin_removal(&mut self, key: &ItemKey) -> Result<(), CartError> {
        let row = self.lock_row(key)?;
        row.status = RowStatus::Busy;
        Ok(())
    }

    pub fn settle_removal(&mut self, key: &ItemKey, outcome: Result<RemovalResponse, ApiError>) -> Settled {
        match outcome {
            Ok(response) if response.success => {
                self.set_status(key, RowStatus::Fading);
                Settled::Fading(response)
            }
            Ok(response) => {
                let message = response.message.unwrap_or_else(|| GENERIC_FAILURE.to_string());
                self.set_status(key, RowStatus::Failed(message));
                Settled::Rejected
            }
            Err(ApiError::Status { message: Some(message), .. }) => {
                self.set_status(key, RowStatus::Failed(message));
                Settled::Rejected
            }
            Err(_) => {
                self.set_status(key, RowStatus::Idle);
                Settled::Restored
            }
        }
    }

    /// Drop the faded row and apply the server's numbers.
    ///
    /// Responses can complete out of order. A removal never raises the count,
    /// and a response whose `cart_count` is above one already seen predates
    /// it, so its subtotal is ignored.
    pub fn complete_removal(&mut self, key: &ItemKey, response: &RemovalResponse) {
        self.rows.retain(|row| row.item.key() != *key);

        // Removals still in flight may or may not be counted by the server yet
        let in_flight = self.rows.iter().filter(|row| row.status.is_locked()).count() as u32;
        let decremented = self.count.saturating_sub(1);
        self.count = match response.cart_count {
            Some(count) => decremented.min(count.saturating_add(in_flight)),
            None => decremented,
        };

        let fresh = match (response.cart_count, self.server_count) {
            (Some(count), Some(lowest)) => count <= lowest,
            _ => true,
        };
        if let Some(count) = response.cart_count {
            self.server_count = Some(self.server_count.map_or(count, |lowest| lowest.min(count)));
        }

        if self.count == 0 {
            self.rows.clear();
        }

        // Only a rendered summary is updated
        if let (true, Some(subtotal), Some(_)) = (fresh, response.subtotal, self.subtotal) {
            self.subtotal = Some(subtotal);
        }
    }

    // ========================
    // Quantity
    // ========================

    pub fn begin_quantity_change(&mut self, key: &ItemKey, action: QuantityAction) -> Result<(), CartError> {
        let row = self.lock_row(key)?;
        if action == QuantityAction::Decrease && row.item.quantity <= 1 {
            return Err(CartError::AtMinimum(key.clone()));
        }
        row.status = RowStatus::Busy;
        Ok(())
    }

    pub fn settle_quantity_change(
        &mut self,
        key: &ItemKey,
        action: QuantityAction,
        outcome: Result<QuantityResponse, ApiError>,
    ) {
        match outcome {
            Ok(response) if response.success => {
                if let Some(row) = self.row_mut(key) {
                    row.item.quantity = match action {
                        QuantityAction::Increase => row.item.quantity + 1,
                        QuantityAction::Decrease => row.item.quantity.saturating_sub(1).max(1),
                    };
                    row.status = RowStatus::Idle;
                }
                if self.subtotal.is_some() {
                    self.subtotal = Some(self.rows.iter().map(|row| row.item.line_total()).sum());
                }
            }
            Ok(response) => {
                let message = response.message.unwrap_or_else(|| GENERIC_FAILURE.to_string());
                self.set_status(key, RowStatus::Failed(message));
            }
            Err(ApiError::Status { message: Some(message), .. }) => {
                self.set_status(key, RowStatus::Failed(message));
            }
            Err(_) => self.set_status(key, RowStatus::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            item_type: "main".to_string(),
            name: format!("Dish {}", id),
            price,
            quantity,
        }
    }

    fn make_cart(ids: &[&str]) -> CartState {
        CartState::from_snapshot(CartSnapshot {
            items: ids.iter().map(|id| make_item(id, 5.0, 1)).collect(),
            subtotal: Some(5.0 * ids.len() as f64),
            count: None,
        })
    }

    fn key(id: &str) -> ItemKey {
        ItemKey::new(id, "main")
    }

    fn success(subtotal: Option<f64>) -> RemovalResponse {
        RemovalResponse { success: true, subtotal, ..Default::default() }
    }

    #[test]
    fn test_begin_removal_locks_row() {
        let mut cart = make_cart(&["a", "b"]);
        cart.begin_removal(&key("a")).unwrap();

        assert_eq!(cart.row(&key("a")).unwrap().status, RowStatus::Busy);
        assert_eq!(cart.begin_removal(&key("a")), Err(CartError::Busy(key("a"))));
        // Other rows stay independent
        assert!(cart.begin_removal(&key("b")).is_ok());
    }

    #[test]
    fn test_begin_removal_unknown_item() {
        let mut cart = make_cart(&["a"]);
        assert_eq!(cart.begin_removal(&key("zzz")), Err(CartError::UnknownItem(key("zzz"))));
    }

    #[test]
    fn test_removal_updates_badge_subtotal_and_total() {
        let mut cart = make_cart(&["a", "b", "c"]);
        assert_eq!(cart.badge(), Some(3));

        cart.begin_removal(&key("a")).unwrap();
        let settled = cart.settle_removal(&key("a"), Ok(success(Some(12.50))));
        assert_eq!(cart.row(&key("a")).unwrap().status, RowStatus::Fading);
        // Nothing else changes until the fade is done
        assert_eq!(cart.badge(), Some(3));

        let Settled::Fading(response) = settled else { panic!("expected fade") };
        cart.complete_removal(&key("a"), &response);

        assert!(cart.row(&key("a")).is_none());
        assert_eq!(cart.badge(), Some(2));
        assert_eq!(cart.subtotal_label().as_deref(), Some("$12.50"));
        assert_eq!(cart.total_label(2.0).as_deref(), Some("$14.50"));
        assert_eq!(cart.row(&key("b")).unwrap().status, RowStatus::Idle);
    }

    #[test]
    fn test_last_removal_empties_cart() {
        let mut cart = make_cart(&["a"]);
        cart.begin_removal(&key("a")).unwrap();
        let Settled::Fading(response) = cart.settle_removal(&key("a"), Ok(success(Some(0.0)))) else {
            panic!("expected fade")
        };
        cart.complete_removal(&key("a"), &response);

        assert!(cart.is_empty());
        assert_eq!(cart.badge(), None);
        assert!(cart.rows.is_empty());
    }

    #[test]
    fn test_server_count_is_authoritative() {
        let mut cart = make_cart(&["a", "b", "c"]);
        cart.begin_removal(&key("a")).unwrap();
        let response = RemovalResponse { success: true, cart_count: Some(0), ..Default::default() };
        cart.settle_removal(&key("a"), Ok(response.clone()));
        cart.complete_removal(&key("a"), &response);

        // Zero count empties the view even with rows left
        assert!(cart.is_empty());
        assert!(cart.rows.is_empty());
    }

    #[test]
    fn test_concurrent_removals_both_count() {
        let mut cart = make_cart(&["a", "b", "c"]);
        cart.begin_removal(&key("a")).unwrap();
        cart.begin_removal(&key("b")).unwrap();

        cart.settle_removal(&key("b"), Ok(success(Some(10.0))));
        cart.settle_removal(&key("a"), Ok(success(Some(5.0))));
        cart.complete_removal(&key("b"), &success(Some(10.0)));
        cart.complete_removal(&key("a"), &success(Some(5.0)));

        assert_eq!(cart.badge(), Some(1));
        assert_eq!(cart.rows.len(), 1);
        assert_eq!(cart.subtotal_label().as_deref(), Some("$5.00"));
    }

    #[test]
    fn test_concurrent_removals_out_of_order() {
        let mut cart = make_cart(&["a", "b", "c"]);
        cart.begin_removal(&key("a")).unwrap();
        cart.begin_removal(&key("b")).unwrap();

        // The server handled a first, then b; b's response completes first
        let for_a = RemovalResponse { success: true, cart_count: Some(2), subtotal: Some(10.0), ..Default::default() };
        let for_b = RemovalResponse { success: true, cart_count: Some(1), subtotal: Some(5.0), ..Default::default() };
        cart.settle_removal(&key("b"), Ok(for_b.clone()));
        cart.settle_removal(&key("a"), Ok(for_a.clone()));
        cart.complete_removal(&key("b"), &for_b);
        cart.complete_removal(&key("a"), &for_a);

        assert_eq!(cart.rows.len(), 1);
        assert_eq!(cart.badge(), Some(1));
        assert_eq!(cart.subtotal_label().as_deref(), Some("$5.00"));
        assert_eq!(cart.total_label(2.0).as_deref(), Some("$7.00"));
    }

    #[test]
    fn test_server_count_never_raises_badge() {
        let mut cart = make_cart(&["a", "b"]);
        cart.begin_removal(&key("a")).unwrap();
        let response = RemovalResponse { success: true, cart_count: Some(7), ..Default::default() };
        cart.settle_removal(&key("a"), Ok(response.clone()));
        cart.complete_removal(&key("a"), &response);
        assert_eq!(cart.badge(), Some(1));
    }

    #[test]
    fn test_fading_row_is_inert() {
        let mut cart = make_cart(&["a"]);
        cart.begin_removal(&key("a")).unwrap();
        cart.settle_removal(&key("a"), Ok(success(Some(0.0))));

        assert_eq!(cart.row(&key("a")).unwrap().status, RowStatus::Fading);
        assert_eq!(cart.begin_removal(&key("a")), Err(CartError::Busy(key("a"))));
        assert_eq!(
            cart.begin_quantity_change(&key("a"), QuantityAction::Increase),
            Err(CartError::Busy(key("a")))
        );
    }

    #[test]
    fn test_error_status_message_is_shown() {
        let mut cart = make_cart(&["a"]);
        cart.begin_removal(&key("a")).unwrap();
        let settled = cart.settle_removal(
            &key("a"),
            Err(ApiError::Status { status: 401, message: Some("Not logged in".to_string()) }),
        );

        assert_eq!(settled, Settled::Rejected);
        let status = &cart.row(&key("a")).unwrap().status;
        assert!(!status.is_locked());
        assert_eq!(status.error(), Some("Not logged in"));
        assert_eq!(cart.badge(), Some(1));
    }

    #[test]
    fn test_quantity_error_status_message_is_shown() {
        let mut cart = make_cart(&["a"]);
        cart.begin_quantity_change(&key("a"), QuantityAction::Increase).unwrap();
        cart.settle_quantity_change(
            &key("a"),
            QuantityAction::Increase,
            Err(ApiError::Status { status: 404, message: Some("Item not found".to_string()) }),
        );

        let row = cart.row(&key("a")).unwrap();
        assert_eq!(row.item.quantity, 1);
        assert_eq!(row.status.error(), Some("Item not found"));
    }

    #[test]
    fn test_transport_failure_restores_row() {
        let mut cart = make_cart(&["a", "b"]);
        cart.begin_removal(&key("a")).unwrap();
        let settled = cart.settle_removal(&key("a"), Err(ApiError::Network("offline".to_string())));

        assert_eq!(settled, Settled::Restored);
        let row = cart.row(&key("a")).unwrap();
        assert_eq!(row.status, RowStatus::Idle);
        assert!(!row.status.is_locked());
        assert_eq!(cart.badge(), Some(2));
        // Retry is allowed
        assert!(cart.begin_removal(&key("a")).is_ok());
    }

    #[test]
    fn test_server_rejection_shows_error_and_unlocks() {
        let mut cart = make_cart(&["a"]);
        cart.begin_removal(&key("a")).unwrap();
        let response = RemovalResponse { success: false, message: Some("Not logged in".to_string()), ..Default::default() };
        assert_eq!(cart.settle_removal(&key("a"), Ok(response)), Settled::Rejected);

        let status = &cart.row(&key("a")).unwrap().status;
        assert!(!status.is_locked());
        assert_eq!(status.error(), Some("Not logged in"));
        assert_eq!(cart.badge(), Some(1));
    }

    #[test]
    fn test_rejection_without_message_uses_generic_text() {
        let mut cart = make_cart(&["a"]);
        cart.begin_removal(&key("a")).unwrap();
        cart.settle_removal(&key("a"), Ok(RemovalResponse::default()));
        assert_eq!(cart.row(&key("a")).unwrap().status.error(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_subtotal_skipped_without_summary() {
        let mut cart = CartState::from_snapshot(CartSnapshot {
            items: vec![make_item("a", 4.0, 1), make_item("b", 4.0, 1)],
            subtotal: None,
            count: None,
        });
        cart.begin_removal(&key("a")).unwrap();
        cart.settle_removal(&key("a"), Ok(success(Some(4.0))));
        cart.complete_removal(&key("a"), &success(Some(4.0)));

        assert_eq!(cart.subtotal_label(), None);
        assert_eq!(cart.total_label(2.0), None);
        assert_eq!(cart.badge(), Some(1));
    }

    #[test]
    fn test_snapshot_count_overrides_row_count() {
        let cart = CartState::from_snapshot(CartSnapshot {
            items: vec![make_item("a", 1.0, 1)],
            subtotal: Some(1.0),
            count: Some(4),
        });
        assert_eq!(cart.badge(), Some(4));

        let empty = CartState::from_snapshot(CartSnapshot::default());
        assert!(empty.is_empty());
        assert_eq!(empty.badge(), None);
    }

    #[test]
    fn test_quantity_increase_recomputes_subtotal() {
        let mut cart = CartState::from_snapshot(CartSnapshot {
            items: vec![make_item("a", 2.25, 1), make_item("b", 4.0, 2)],
            subtotal: Some(10.25),
            count: None,
        });
        cart.begin_quantity_change(&key("a"), QuantityAction::Increase).unwrap();
        assert!(cart.row(&key("a")).unwrap().status.is_locked());

        cart.settle_quantity_change(
            &key("a"),
            QuantityAction::Increase,
            Ok(QuantityResponse { success: true, message: None }),
        );
        let row = cart.row(&key("a")).unwrap();
        assert_eq!(row.item.quantity, 2);
        assert_eq!(row.status, RowStatus::Idle);
        assert_eq!(cart.subtotal_label().as_deref(), Some("$12.50"));
        assert_eq!(cart.total_label(2.0).as_deref(), Some("$14.50"));
    }

    #[test]
    fn test_quantity_decrease_stops_at_one() {
        let mut cart = make_cart(&["a"]);
        assert_eq!(
            cart.begin_quantity_change(&key("a"), QuantityAction::Decrease),
            Err(CartError::AtMinimum(key("a")))
        );
        assert_eq!(cart.row(&key("a")).unwrap().status, RowStatus::Idle);
    }

    #[test]
    fn test_quantity_failure_keeps_quantity() {
        let mut cart = make_cart(&["a"]);
        cart.begin_quantity_change(&key("a"), QuantityAction::Increase).unwrap();
        cart.settle_quantity_change(
            &key("a"),
            QuantityAction::Increase,
            Err(ApiError::Status { status: 500, message: None }),
        );
        let row = cart.row(&key("a")).unwrap();
        assert_eq!(row.item.quantity, 1);
        assert_eq!(row.status, RowStatus::Idle);
        assert_eq!(cart.subtotal_label().as_deref(), Some("$5.00"));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_money(3.0 + 2.0), "$5.00");
    }
}
