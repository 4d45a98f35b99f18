/* src/client/store/rust/src/lib.rs */

pub mod orders;
pub mod store;

pub use orders::{DynOrdersStore, Order, Orders, OrdersAction, OrdersReducer, OrdersStore, RecipeId};
pub use store::{Listener, MemoryStore, Reducer, Store, Subscription};
