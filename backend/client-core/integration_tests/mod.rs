mod character_search;
mod csrf;
mod helpers;
mod http_client;
mod search_list;
