mod classify;
mod config;
mod notation;
mod operand;
