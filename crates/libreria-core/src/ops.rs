//! Catalog Operations
//!
//! One async function per user action. Each performs at most one request,
//! logs failures to the console and returns the `Outcome` to apply.

use crate::api::BookApi;
use crate::book::BookId;
use crate::catalog::{Outcome, Submission};
use crate::error::CatalogError;

fn logged<T>(action: &str, result: Result<T, CatalogError>) -> Result<T, CatalogError> {
    if let Err(err) = &result {
        log::error!("[API] {} failed: {}", action, err);
    }
    result
}

/// Fetch the full list
pub async fn fetch_books<A: BookApi + ?Sized>(api: &A) -> Result<Outcome, CatalogError> {
    let result = api.list_books().await.map_err(CatalogError::from);
    let result = logged("load books", result)?;
    log::info!("[API] Loaded {} books", result.len());
    Ok(Outcome::Loaded(result))
}

/// Send a validated form submission
pub async fn submit<A: BookApi + ?Sized>(
    api: &A,
    submission: Submission,
) -> Result<Outcome, CatalogError> {
    match submission {
        Submission::Create(book) => {
            let result = api.create_book(&book).await.map_err(CatalogError::from);
            let created = logged("create book", result)?;
            log::debug!("[API] Created book {}", created.id);
            Ok(Outcome::Created(created))
        }
        Submission::Update(id, book) => {
            let result = api.update_book(id, &book).await.map_err(CatalogError::from);
            let updated = logged("update book", result)?;
            log::debug!("[API] Updated book {}", updated.id);
            Ok(Outcome::Updated(updated))
        }
    }
}

pub async fn delete_book<A: BookApi + ?Sized>(
    api: &A,
    id: BookId,
) -> Result<Outcome, CatalogError> {
    let result = api.delete_book(id).await.map_err(CatalogError::from);
    logged("delete book", result)?;
    log::debug!("[API] Deleted book {}", id);
    Ok(Outcome::Deleted(id))
}

/// Delete every record once the user has confirmed.
///
/// Unconfirmed calls send nothing and return `Ok(None)`.
pub async fn clear_books<A: BookApi + ?Sized>(
    api: &A,
    confirmed: bool,
) -> Result<Option<Outcome>, CatalogError> {
    if !confirmed {
        log::debug!("[API] Clear library not confirmed");
        return Ok(None);
    }
    let result = api.delete_all_books().await.map_err(CatalogError::from);
    logged("clear library", result)?;
    log::info!("[API] Library cleared");
    Ok(Some(Outcome::Cleared))
}
