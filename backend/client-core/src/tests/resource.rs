use crate::http_client::resource::Resource;

use models::SearchList;

use serde_json::json;

/// **VALUE**: Verifies that a Laravel resource envelope is unwrapped.
///
/// **WHY THIS MATTERS**: `JsonResource` responses nest the model under `data`;
/// decoding them as a bare model would fail every SearchList call.
#[test]
fn given_wrapped_resource_when_decoded_then_inner_value_is_returned() {
    let body = json!({"data": {"id": 4, "name": "MyList", "searches": []}});

    let list = serde_json::from_value::<Resource<SearchList>>(body)
        .unwrap()
        .into_inner();

    assert_eq!(list.name, "MyList");
}

#[test]
fn given_bare_resource_when_decoded_then_value_is_returned() {
    let body = json!({"id": 4, "name": "MyList"});

    let list = serde_json::from_value::<Resource<SearchList>>(body)
        .unwrap()
        .into_inner();

    assert_eq!(list.id.0, 4);
    assert!(list.searches.is_empty());
}

#[test]
fn given_wrapped_collection_when_decoded_then_all_items_are_returned() {
    let body = json!({"data": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]});

    let lists = serde_json::from_value::<Resource<Vec<SearchList>>>(body)
        .unwrap()
        .into_inner();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[1].name, "B");
}
