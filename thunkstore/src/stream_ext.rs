use futures_core::stream::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait for watching a store's state stream up to a condition.
pub trait StoreStreamExt: Stream {
    /// Yields items from the underlying stream until the predicate returns
    /// true for one of them. That item is still yielded; after it the stream
    /// ends.
    ///
    /// Typical use is consuming a store's signal stream until a resource
    /// settles:
    ///
    /// ```ignore
    /// store
    ///     .to_signal()
    ///     .to_stream()
    ///     .stop_when(|state| state.posts.is_settled())
    ///     .for_each(|state| { render(&state); async {} })
    ///     .await;
    /// ```
    fn stop_when<F>(self, predicate: F) -> StopWhen<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Sized,
    {
        StopWhen {
            stream: self,
            done: false,
            predicate,
        }
    }
}

impl<T: ?Sized> StoreStreamExt for T where T: Stream {}

/// Stream returned by [`StoreStreamExt::stop_when`].
#[pin_project(project = StopWhenProj)]
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled"]
pub struct StopWhen<St, F> {
    #[pin]
    stream: St,
    done: bool,
    predicate: F,
}

impl<St, F> Stream for StopWhen<St, F>
where
    St: Stream,
    F: FnMut(&St::Item) -> bool,
{
    type Item = St::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let StopWhenProj {
            stream,
            done,
            predicate,
        } = self.project();

        if *done {
            return Poll::Ready(None);
        }

        match stream.poll_next(cx) {
            Poll::Ready(Some(item)) => {
                if predicate(&item) {
                    *done = true;
                }
                Poll::Ready(Some(item))
            }
            Poll::Ready(None) => {
                *done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream::{self, StreamExt};

    #[tokio::test]
    async fn test_stop_when_is_inclusive() {
        let items: Vec<i32> = stream::iter(vec![1, 2, 3, 4, 5])
            .stop_when(|&item| item == 3)
            .collect()
            .await;
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stop_when_passes_through_a_finished_stream() {
        let items: Vec<i32> = stream::iter(vec![1, 2])
            .stop_when(|&item| item == 9)
            .collect()
            .await;
        assert_eq!(items, vec![1, 2]);
    }
}
