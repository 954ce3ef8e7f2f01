mod search_list;
mod search_query;
