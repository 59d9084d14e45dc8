//! Item service implementation

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::entities::booking::Booking;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::item::Item;
use crate::domain::value_objects::state_filter::StateFilter;
use crate::domain::value_objects::views::ItemView;
use crate::errors::{CommentError, DomainError, DomainResult};
use crate::repositories::{
    BookingRepository, CommentRepository, ItemRepository, ItemRequestRepository, UserRepository,
};

/// New item as submitted by its owner
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    /// Catalog request this listing fulfills, if any
    pub request_id: Option<i64>,
}

/// Partial update of an item; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Item service managing the catalog and the owner's item views.
pub struct ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    item_repository: Arc<I>,
    user_repository: Arc<U>,
    booking_repository: Arc<B>,
    comment_repository: Arc<C>,
    request_repository: Arc<R>,
}

impl<I, U, B, C, R> ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    /// Create a new item service
    pub fn new(
        item_repository: Arc<I>,
        user_repository: Arc<U>,
        booking_repository: Arc<B>,
        comment_repository: Arc<C>,
        request_repository: Arc<R>,
    ) -> Self {
        Self {
            item_repository,
            user_repository,
            booking_repository,
            comment_repository,
            request_repository,
        }
    }

    /// List a new item. When the item answers a catalog request, that
    /// request must exist.
    pub async fn create_item(&self, owner_id: i64, new_item: NewItem) -> DomainResult<Item> {
        self.user_repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        if let Some(request_id) = new_item.request_id {
            self.request_repository
                .find_by_id(request_id)
                .await?
                .ok_or_else(|| DomainError::not_found("ItemRequest"))?;
        }

        let item = Item::new(
            new_item.name,
            new_item.description,
            new_item.available,
            owner_id,
            new_item.request_id,
        );
        let item = self.item_repository.create(item).await?;
        info!(item_id = item.id, owner_id, "item created");
        Ok(item)
    }

    /// Partially update an item. Only the owner may update; anyone else is
    /// told the item does not exist rather than that it is forbidden, so
    /// the listing's existence is not leaked.
    pub async fn update_item(&self, caller_id: i64, item_id: i64, update: ItemUpdate) -> DomainResult<Item> {
        let mut item = self
            .item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;
        if !item.is_owned_by(caller_id) {
            return Err(DomainError::not_found("Item"));
        }

        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(description) = update.description {
            item.description = description;
        }
        if let Some(available) = update.available {
            item.available = available;
        }
        self.item_repository.update(item).await
    }

    /// Fetch one item with its comments. Booking times are only computed
    /// for the owner's batch listing, not here.
    pub async fn get_item(&self, item_id: i64) -> DomainResult<ItemView> {
        let item = self
            .item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;
        let comments = self.comment_repository.find_all_by_item(item_id).await?;
        let mut view = ItemView::bare(item);
        view.comments = comments;
        Ok(view)
    }

    /// Fetch all of one owner's items, each with the end of its most recent
    /// finished booking, the start of its nearest upcoming booking, and its
    /// comments.
    ///
    /// The clock is read once and reused for every item, so the whole batch
    /// is classified against the same instant.
    pub async fn get_items_by_owner(&self, owner_id: i64) -> DomainResult<Vec<ItemView>> {
        let now = Utc::now();

        self.user_repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        let items = self.item_repository.find_all_by_owner(owner_id).await?;
        if items.is_empty() {
            return Err(DomainError::not_found("Items of this user"));
        }

        let bookings = self
            .booking_repository
            .find_all_by_owner(owner_id, StateFilter::All, now)
            .await?;
        let mut bookings_per_item: HashMap<i64, Vec<Booking>> = HashMap::new();
        for booking in bookings {
            bookings_per_item.entry(booking.item_id).or_default().push(booking);
        }

        let item_ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        let comments = self.comment_repository.find_all_by_items(&item_ids).await?;
        let mut comments_per_item: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            comments_per_item.entry(comment.item_id).or_default().push(comment);
        }

        let views = items
            .into_iter()
            .map(|item| {
                let item_bookings = bookings_per_item.remove(&item.id).unwrap_or_default();
                let last_booking = item_bookings
                    .iter()
                    .filter(|b| b.is_finished(now))
                    .map(|b| b.end)
                    .max();
                let next_booking = item_bookings
                    .iter()
                    .filter(|b| b.is_future(now))
                    .map(|b| b.start)
                    .min();
                let comments = comments_per_item.remove(&item.id).unwrap_or_default();
                ItemView {
                    item,
                    last_booking,
                    next_booking,
                    comments,
                }
            })
            .collect();
        Ok(views)
    }

    /// Delete an item; only the owner may do so.
    pub async fn delete_item(&self, caller_id: i64, item_id: i64) -> DomainResult<()> {
        let item = self
            .item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;
        if !item.is_owned_by(caller_id) {
            return Err(DomainError::forbidden("only the owner may delete an item"));
        }
        self.item_repository.delete(item_id).await?;
        info!(item_id, "item deleted");
        Ok(())
    }

    /// Free-text search over available items. Blank text yields an empty
    /// list without touching storage.
    pub async fn search(&self, text: &str) -> DomainResult<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.item_repository.search(text).await
    }

    /// Leave a comment on an item.
    ///
    /// Eligible only if the author has a booking on this item whose end lies
    /// strictly before now. An author with no bookings anywhere and an
    /// author whose rental of this item has not finished fail differently,
    /// matching the distinct reasons surfaced to the caller.
    pub async fn create_comment(&self, author_id: i64, item_id: i64, text: String) -> DomainResult<Comment> {
        let now = Utc::now();

        self.user_repository
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        self.item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;

        let bookings = self
            .booking_repository
            .find_all_by_booker(author_id, StateFilter::All, now)
            .await?;
        if bookings.is_empty() {
            return Err(CommentError::NeverBooked.into());
        }
        let has_finished_rental = bookings
            .iter()
            .filter(|b| b.item_id == item_id)
            .any(|b| b.is_finished(now));
        if !has_finished_rental {
            return Err(CommentError::RentalNotFinished.into());
        }

        let comment = Comment::new(text, item_id, author_id, now);
        self.comment_repository.create(comment).await
    }
}
