//! Translation of docbench predicates into MongoDB query documents.

use docbench_core::{Mutation, Order, Predicate, Sort};
use mongodb::bson::{doc, Document as BsonDocument};

pub fn filter(predicate: &Predicate) -> BsonDocument {
    match predicate {
        Predicate::All => doc! {},
        Predicate::IndexEq(index) => doc! { "index": *index },
        Predicate::IndexLt(bound) => doc! { "index": { "$lt": *bound } },
    }
}

pub fn sort(sort: &Sort) -> BsonDocument {
    let direction = match sort.order {
        Order::Ascending => 1,
        Order::Descending => -1,
    };
    doc! { sort.field.name(): direction }
}

pub fn update(mutation: &Mutation) -> BsonDocument {
    match mutation {
        Mutation::SetTimestamp(timestamp) => doc! { "$set": { "timestamp": *timestamp } },
    }
}
