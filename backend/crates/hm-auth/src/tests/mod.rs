mod password;
mod rate_limit;
mod support;
