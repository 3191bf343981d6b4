mod api;
mod util;
