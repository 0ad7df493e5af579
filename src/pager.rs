use crate::error::Result;
use crate::models::{StarPage, StarredEntry};
use futures::stream::{self, Stream, TryStreamExt};
use futures::pin_mut;

/// A paginated listing of starred repositories, pages numbered from 1.
#[allow(async_fn_in_trait)]
pub trait StarSource {
    async fn fetch_page(&self, page: u32) -> Result<StarPage>;
}

/// Lazily walk every page of `source`, starting from page 1.
///
/// Each item is one page's entries in server order. The stream ends once a
/// page comes back without a next cursor, and stops at the first error.
pub fn starred_pages<S: StarSource>(
    source: &S,
) -> impl Stream<Item = Result<Vec<StarredEntry>>> + '_ {
    stream::try_unfold(Some(1u32), move |cursor| async move {
        let step: Result<Option<(Vec<StarredEntry>, Option<u32>)>> = match cursor {
            None => Ok(None),
            Some(page) => source
                .fetch_page(page)
                .await
                .map(|StarPage { entries, next_page }| Some((entries, next_page))),
        };
        step
    })
}

/// Collect every page into one sequence, calling `on_page` with each page's size.
pub async fn fetch_all<S, F>(source: &S, mut on_page: F) -> Result<Vec<StarredEntry>>
where
    S: StarSource,
    F: FnMut(usize),
{
    let pages = starred_pages(source);
    pin_mut!(pages);

    let mut all = Vec::new();
    while let Some(page) = pages.try_next().await? {
        on_page(page.len());
        all.extend(page);
    }
    Ok(all)
}
