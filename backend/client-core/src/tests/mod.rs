mod api_error;
mod cookie_jar;
mod mutation_state;
mod resource;
mod shared;
