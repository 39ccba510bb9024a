pub use super::feedback::Entity as Feedback;
pub use super::menu::Entity as Menu;
pub use super::order_details::Entity as OrderDetails;
pub use super::orders::Entity as Orders;
pub use super::payment::Entity as Payment;
