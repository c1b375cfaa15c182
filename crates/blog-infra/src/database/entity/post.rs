//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::PostStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub author_id: Uuid,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub scheduled_date: Option<DateTimeWithTimeZone>,
    pub published_date: Option<DateTimeWithTimeZone>,
    pub views: i64,
    pub likes: i64,
    pub meta_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub featured_image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::AuthorId",
        to = "super::admin::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Admin,
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            excerpt: model.excerpt,
            content: model.content,
            author: model.author,
            author_id: model.author_id,
            categories: model.categories,
            tags: model.tags,
            // A row with an unrecognized status string is surfaced as a draft.
            status: PostStatus::parse(&model.status).unwrap_or_default(),
            scheduled_date: model.scheduled_date.map(Into::into),
            published_date: model.published_date.map(Into::into),
            views: model.views,
            likes: model.likes,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            meta_keywords: model.meta_keywords,
            og_image: model.og_image,
            twitter_card: model.twitter_card,
            featured_image: model.featured_image,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain Post to a SeaORM ActiveModel.
impl From<blog_core::domain::Post> for ActiveModel {
    fn from(post: blog_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            slug: Set(post.slug),
            title: Set(post.title),
            excerpt: Set(post.excerpt),
            content: Set(post.content),
            author: Set(post.author),
            author_id: Set(post.author_id),
            categories: Set(post.categories),
            tags: Set(post.tags),
            status: Set(post.status.as_str().to_string()),
            scheduled_date: Set(post.scheduled_date.map(Into::into)),
            published_date: Set(post.published_date.map(Into::into)),
            views: Set(post.views),
            likes: Set(post.likes),
            meta_title: Set(post.meta_title),
            meta_description: Set(post.meta_description),
            meta_keywords: Set(post.meta_keywords),
            og_image: Set(post.og_image),
            twitter_card: Set(post.twitter_card),
            featured_image: Set(post.featured_image),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
