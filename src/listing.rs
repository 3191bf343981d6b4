//! Client-side search, sort and pagination for the list screens.
//!
//! A [`ListState`] holds what the user controls (search term, sort key and direction, page);
//! [`ListState::apply`] turns a fetched collection into the [`Page`] to render. The collection
//! itself is never modified.

use std::cmp::Ordering;

use crate::model::{
    api::Reference, client::ClientDto, contractor::ContractorDto, project::ProjectDto,
    user::UserDto,
};

/// Rows per page on every list screen
pub const PAGE_SIZE: usize = 10;

/// A record that can be listed.
pub trait Row {
    /// Columns the list can be sorted by
    type Key: Copy + PartialEq + std::fmt::Debug;

    /// Text the search box matches against
    fn search_fields(&self) -> Vec<&str>;

    /// Ascending order of `self` relative to `other` on `key`
    fn compare(&self, other: &Self, key: Self::Key) -> Ordering;

    /// Case-insensitive substring match over [`Row::search_fields`].
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// User-controlled view settings of a list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<K> {
    search: String,
    sort: Option<(K, Direction)>,
    page: usize,
}

impl<K> Default for ListState<K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
        }
    }
}

/// One rendered page of a list.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub rows: Vec<&'a T>,
    /// The page actually shown, after clamping
    pub page: usize,
    pub total_pages: usize,
    /// Rows matching the search, across all pages
    pub matching: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `Showing 11-20 of 34`, or `Showing 0 of 0` when nothing matches
    pub fn summary(&self) -> String {
        if self.rows.is_empty() {
            return format!("Showing 0 of {}", self.matching);
        }
        let first = (self.page - 1) * PAGE_SIZE + 1;
        let last = first + self.rows.len() - 1;
        format!("Showing {first}-{last} of {}", self.matching)
    }
}

/// Number of pages needed for `rows`; an empty list still has one page
pub fn total_pages(rows: usize) -> usize {
    rows.div_ceil(PAGE_SIZE).max(1)
}

impl<K: Copy + PartialEq> ListState<K> {
    /// A state that starts sorted on `key`
    pub fn sorted_by(key: K, direction: Direction) -> Self {
        Self {
            search: String::new(),
            sort: Some((key, direction)),
            page: 1,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<(K, Direction)> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Updates the search term and returns to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Sorts on `key`: the same key flips the direction, a new key starts ascending
    pub fn toggle_sort(&mut self, key: K) {
        self.sort = match self.sort {
            Some((current, direction)) if current == key => Some((key, direction.flipped())),
            _ => Some((key, Direction::Asc)),
        };
    }

    /// Direction of `key` if it is the active sort column
    pub fn direction_of(&self, key: K) -> Option<Direction> {
        self.sort
            .and_then(|(current, direction)| (current == key).then_some(direction))
    }

    /// Moves to `page`; values below 1 become 1, the upper bound is applied in [`Self::apply`]
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filters, stably sorts and slices `rows`.
    ///
    /// # Arguments
    /// - `rows` - The full fetched collection, in backend order
    ///
    /// # Returns
    /// The current page; ties in the sort keep backend order in both directions.
    pub fn apply<'a, T>(&self, rows: &'a [T]) -> Page<'a, T>
    where
        T: Row<Key = K>,
    {
        let needle = self.search.to_lowercase();
        let mut matching: Vec<&T> = rows.iter().filter(|row| row.matches(&needle)).collect();

        if let Some((key, direction)) = self.sort {
            matching.sort_by(|a, b| {
                let ordering = a.compare(b, key);
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        let total = matching.len();
        let total_pages = total_pages(total);
        let page = self.page.clamp(1, total_pages);
        let rows = matching
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        Page {
            rows,
            page,
            total_pages,
            matching: total,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserSortKey {
    UserName,
    Email,
    Role,
    Status,
    CreatedAt,
}

impl Row for UserDto {
    type Key = UserSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.user_name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
            self.status.as_str(),
        ]
    }

    fn compare(&self, other: &Self, key: UserSortKey) -> Ordering {
        match key {
            UserSortKey::UserName => self.user_name.cmp(&other.user_name),
            UserSortKey::Email => self.email.cmp(&other.email),
            UserSortKey::Role => self.role.cmp(&other.role),
            UserSortKey::Status => self.status.cmp(&other.status),
            UserSortKey::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

/// The user list opens with the newest accounts first
pub fn user_list_state() -> ListState<UserSortKey> {
    ListState::sorted_by(UserSortKey::CreatedAt, Direction::Desc)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectSortKey {
    Name,
    Code,
    Status,
    Cost,
}

impl Row for ProjectDto {
    type Key = ProjectSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.project_code.as_str()]
    }

    fn compare(&self, other: &Self, key: ProjectSortKey) -> Ordering {
        match key {
            ProjectSortKey::Name => self.name.cmp(&other.name),
            ProjectSortKey::Code => self.project_code.cmp(&other.project_code),
            ProjectSortKey::Status => self.status.cmp(&other.status),
            ProjectSortKey::Cost => self
                .headline_cost()
                .unwrap_or_default()
                .total_cmp(&other.headline_cost().unwrap_or_default()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractorSortKey {
    CompanyName,
    ContractorType,
    PaymentTerms,
}

impl Row for ContractorDto {
    type Key = ContractorSortKey;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.company_name.as_str(),
            self.contractor_type.as_str(),
            self.phone_number.as_str(),
        ];
        fields.extend(self.owner_name());
        fields
    }

    fn compare(&self, other: &Self, key: ContractorSortKey) -> Ordering {
        match key {
            ContractorSortKey::CompanyName => self.company_name.cmp(&other.company_name),
            ContractorSortKey::ContractorType => self.contractor_type.cmp(&other.contractor_type),
            ContractorSortKey::PaymentTerms => self.payment_terms.cmp(&other.payment_terms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientSortKey {
    Name,
    PaymentTerms,
}

fn client_user_name(client: &ClientDto) -> &str {
    match &client.user {
        Reference::Populated(user) => &user.user_name,
        Reference::Id(id) => id,
    }
}

impl Row for ClientDto {
    type Key = ClientSortKey;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            client_user_name(self),
            self.phone_number.as_str(),
            self.address.as_str(),
        ];
        if let Reference::Populated(user) = &self.user {
            fields.push(user.email.as_str());
        }
        fields
    }

    fn compare(&self, other: &Self, key: ClientSortKey) -> Ordering {
        match key {
            ClientSortKey::Name => client_user_name(self).cmp(client_user_name(other)),
            ClientSortKey::PaymentTerms => self.payment_terms.cmp(&other.payment_terms),
        }
    }
}
