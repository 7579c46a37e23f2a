pub mod mercantil_http_gateway;
