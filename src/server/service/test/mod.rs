mod order;
mod revenue;
