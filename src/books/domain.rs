use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Sync + Send {
    fn status(&self) -> BookStatus;

    fn is_borrowed(&self) -> bool {
        self.status() == BookStatus::Borrowed
    }
}
