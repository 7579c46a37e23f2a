#![allow(dead_code)]

pub mod mercantil;
pub mod stub_gateway;
