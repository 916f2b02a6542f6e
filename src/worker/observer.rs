use tokio::sync::mpsc::UnboundedReceiver;
use crate::core::{ConversionEvent, ConversionOutcome};

/// Callback view of a job's event stream, for front ends that prefer
/// `onProgress`/`onStatus`/`onFinished` style hooks over a channel.
pub trait ConversionObserver {
    fn on_progress(&mut self, _percent: u8) {}

    fn on_status(&mut self, _message: &str) {}

    fn on_outcome(&mut self, _outcome: &ConversionOutcome) {}

    fn on_finished(&mut self) {}
}

/// Drains `events` into `observer` until the job finishes.
///
/// Returns once `on_finished` has been called, or when the worker side closed
/// without finishing (only possible if the worker was torn down abnormally).
pub async fn dispatch_events<O>(events: &mut UnboundedReceiver<ConversionEvent>, observer: &mut O)
where
    O: ConversionObserver + ?Sized,
{
    while let Some(event) = events.recv().await {
        match event {
            ConversionEvent::Progress(percent) => observer.on_progress(percent),
            ConversionEvent::Status(message) => observer.on_status(&message),
            ConversionEvent::Outcome(outcome) => observer.on_outcome(&outcome),
            ConversionEvent::Finished => {
                observer.on_finished();
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ConversionObserver for Recorder {
        fn on_progress(&mut self, percent: u8) {
            self.calls.push(format!("progress {percent}"));
        }

        fn on_status(&mut self, message: &str) {
            self.calls.push(format!("status {message}"));
        }

        fn on_finished(&mut self) {
            self.calls.push("finished".to_string());
        }
    }

    #[tokio::test]
    async fn test_dispatch_stops_at_finished() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(ConversionEvent::Status("Converting: a.png".into())).unwrap();
        tx.send(ConversionEvent::Outcome(ConversionOutcome::failed("a.png".into(), "x"))).unwrap();
        tx.send(ConversionEvent::Progress(100)).unwrap();
        tx.send(ConversionEvent::Finished).unwrap();
        tx.send(ConversionEvent::Progress(7)).unwrap();

        let mut recorder = Recorder::default();
        dispatch_events(&mut rx, &mut recorder).await;

        assert_eq!(
            recorder.calls,
            vec!["status Converting: a.png", "progress 100", "finished"]
        );
        // Anything after Finished is left in the channel
        assert_eq!(rx.try_recv().unwrap(), ConversionEvent::Progress(7));
    }

    #[tokio::test]
    async fn test_dispatch_returns_when_sender_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(ConversionEvent::Progress(50)).unwrap();
        drop(tx);

        let mut recorder = Recorder::default();
        dispatch_events(&mut rx, &mut recorder).await;
        assert_eq!(recorder.calls, vec!["progress 50"]);
    }
}
