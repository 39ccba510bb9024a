mod menu;
mod order;
mod order_detail;
