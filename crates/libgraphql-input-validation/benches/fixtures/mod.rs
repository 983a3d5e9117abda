pub const SCHEMA: &str = r#"
directive @items(min: Int, max: Int, message: String) on ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION
directive @length(min: Int, max: Int, message: String) on ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION
directive @range(min: Float, max: Float, message: String) on ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION

type Query {
  search(term: String @length(min: 1, max: 64), first: Int @range(min: 1, max: 100)): [Item]
}

type Mutation {
  createOrders(orders: [OrderInput!]! @items(max: 100000)): [Item]
}

type Item {
  id: ID!
}

input OrderInput {
  sku: String! @length(min: 3, max: 32)
  quantity: Int! @range(min: 1, max: 1000)
  tags: [String] @items(max: 8) @length(max: 16)
  address: AddressInput
}

input AddressInput {
  street: String! @length(max: 128)
  postalCode: String! @length(min: 5, max: 10)
}
"#;

pub const SEARCH_QUERY: &str =
    "query ($term: String, $first: Int) { search(term: $term, first: $first) { id } }";

pub const CREATE_ORDERS_MUTATION: &str =
    "mutation ($orders: [OrderInput!]!) { createOrders(orders: $orders) { id } }";

/// Variables for [`CREATE_ORDERS_MUTATION`] holding `count` orders, every
/// `invalid_every`-th of which breaks its `quantity` bound.
pub fn orders_variables(count: usize, invalid_every: usize) -> serde_json::Value {
    let orders =
        (0..count)
            .map(|idx| serde_json::json!({
                "sku": format!("SKU-{idx:05}"),
                "quantity": if idx % invalid_every == 0 { 5000 } else { 1 + idx % 100 },
                "tags": ["bulk", "priority"],
                "address": {
                    "street": "1 Infinite Loop",
                    "postalCode": "95014",
                },
            }))
            .collect::<Vec<_>>();
    serde_json::json!({ "orders": orders })
}
