use super::filesystem::FileSystem;
use super::hint::HintResolver;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// A hint lookup for the text typed at edit number `generation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintRequest {
    pub generation: u64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintResponse {
    pub generation: u64,
    pub suggestion: Option<PathBuf>,
}

/// Resolve hints on a background thread.
///
/// Requests that queue up while a lookup is running are collapsed to the
/// newest one. `notify` runs after every response is sent. The thread exits
/// once the request sender is dropped.
pub fn spawn_hint_worker<F, N>(
    fs: F,
    resolver: HintResolver,
    notify: N,
) -> (Sender<HintRequest>, Receiver<HintResponse>)
where
    F: FileSystem + Send + 'static,
    N: Fn() + Send + 'static,
{
    let (req_tx, req_rx) = channel::<HintRequest>();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(first) = req_rx.recv() {
            let request = latest(first, req_rx.try_iter());
            let suggestion = resolver.resolve(&fs, &request.text);
            log::debug!(
                "hint #{} for {:?}: {:?}",
                request.generation,
                request.text,
                suggestion
            );
            let response = HintResponse {
                generation: request.generation,
                suggestion,
            };
            if res_tx.send(response).is_err() {
                break;
            }
            notify();
        }
    });

    (req_tx, res_rx)
}

fn latest(first: HintRequest, pending: impl Iterator<Item = HintRequest>) -> HintRequest {
    pending.fold(first, |newest, next| {
        if next.generation >= newest.generation {
            next
        } else {
            newest
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryFileSystem;
    use std::time::Duration;

    fn request(generation: u64, text: &str) -> HintRequest {
        HintRequest {
            generation,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_latest_keeps_newest_generation() {
        let pending = vec![request(2, "/ho"), request(4, "/home/c"), request(3, "/hom")];
        let newest = latest(request(1, "/h"), pending.into_iter());
        assert_eq!(newest, request(4, "/home/c"));
    }

    #[test]
    fn test_latest_without_backlog() {
        assert_eq!(latest(request(7, "/x"), std::iter::empty()), request(7, "/x"));
    }

    #[test]
    fn test_worker_resolves_request() {
        let fs = MemoryFileSystem::new()
            .with_dir("/home/config")
            .with_dir("/home/data");
        let (tx, rx) = spawn_hint_worker(fs, HintResolver::default(), || {});

        tx.send(request(1, "/home/con")).unwrap();
        let response = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(response.generation, 1);
        assert_eq!(response.suggestion, Some(PathBuf::from("/home/config")));
    }

    #[test]
    fn test_worker_answers_newest_request_last() {
        let fs = MemoryFileSystem::new().with_dir("/home/data");
        let (tx, rx) = spawn_hint_worker(fs, HintResolver::default(), || {});

        for (generation, text) in [(1, "/h"), (2, "/home/d"), (3, "/home/x")] {
            tx.send(request(generation, text)).unwrap();
        }
        drop(tx);

        let responses: Vec<HintResponse> = rx.iter().collect();
        let last = responses.last().unwrap();
        assert_eq!(last.generation, 3);
        assert_eq!(last.suggestion, None);
        assert!(responses.windows(2).all(|w| w[0].generation < w[1].generation));
    }
}
