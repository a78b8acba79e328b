//! Cart - persisted line items with change notifications

mod event;
mod store;

#[cfg(test)]
mod tests;

pub use event::{
    CartChange, CartSummary, ChangeKind, MenuRedraw, RedrawPlan, Subscribers, SubscriptionId,
};
pub use store::CartStore;
