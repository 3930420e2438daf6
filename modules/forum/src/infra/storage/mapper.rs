use crate::contract::model::Post;
use crate::infra::storage::entity::Model as PostEntity;

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: PostEntity) -> Post {
    Post {
        id: entity.id,
        author: entity.author,
        title: entity.title,
        body: entity.body,
        created_at: entity.created_at,
    }
}
