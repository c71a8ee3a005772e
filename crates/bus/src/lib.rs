use html::Id;
use input_core::{NavigationApi, SetupError};
use std::sync::mpsc::{Receiver, Sender, channel as mpsc_channel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavCommand {
    // Handshake
    Attach,
    // Navigation
    Next,
    Prev,
    Goto(Id),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("primary side of the link hung up")]
    Disconnected,
}

/// Primary (opener) end: owned by the thread running the presentation engine.
pub struct OpenerLink {
    cmd_rx: Receiver<NavCommand>,
    reply_tx: Sender<bool>,
}

/// Secondary (remote window) end. One request in flight at a time: the
/// remote window's event loop blocks on the reply before handling the next
/// input event.
pub struct RemoteNavigator {
    cmd_tx: Sender<NavCommand>,
    reply_rx: Receiver<bool>,
}

pub fn channel() -> (OpenerLink, RemoteNavigator) {
    let (cmd_tx, cmd_rx) = mpsc_channel();
    let (reply_tx, reply_rx) = mpsc_channel();
    (
        OpenerLink { cmd_rx, reply_tx },
        RemoteNavigator { cmd_tx, reply_rx },
    )
}

/// Obtain a usable navigator for the remote window.
///
/// `None` means the window has no opener at all. Otherwise the primary must
/// answer the attach handshake; a link whose primary is already gone is a
/// setup failure, not something to retry.
pub fn acquire(link: Option<RemoteNavigator>) -> Result<RemoteNavigator, SetupError> {
    let navigator = link.ok_or(SetupError::OpenerMissing)?;
    match navigator.request(NavCommand::Attach) {
        Ok(true) => {
            log::debug!(target: "remote.bus", "attached to primary");
            Ok(navigator)
        }
        Ok(false) => Err(SetupError::FactoryFailed("primary refused attach".into())),
        Err(LinkError::Disconnected) => Err(SetupError::Disconnected),
    }
}

impl RemoteNavigator {
    pub fn request(&self, command: NavCommand) -> Result<bool, LinkError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| LinkError::Disconnected)?;
        self.reply_rx.recv().map_err(|_| LinkError::Disconnected)
    }

    fn call(&self, command: NavCommand) -> bool {
        match self.request(command.clone()) {
            Ok(navigated) => navigated,
            Err(err) => {
                log::warn!(target: "remote.bus", "{command:?} dropped: {err}");
                false
            }
        }
    }
}

impl NavigationApi for RemoteNavigator {
    type Target = Id;

    fn next(&self) -> bool {
        self.call(NavCommand::Next)
    }

    fn prev(&self) -> bool {
        self.call(NavCommand::Prev)
    }

    fn goto(&self, target: &Id) -> bool {
        self.call(NavCommand::Goto(*target))
    }
}

impl OpenerLink {
    pub fn handle<E>(engine: &E, command: &NavCommand) -> bool
    where
        E: NavigationApi<Target = Id> + ?Sized,
    {
        match command {
            NavCommand::Attach => true,
            NavCommand::Next => engine.next(),
            NavCommand::Prev => engine.prev(),
            NavCommand::Goto(id) => engine.goto(id),
        }
    }

    /// Answer commands until the remote side goes away. Blocks the calling
    /// thread.
    pub fn serve<E>(self, engine: &E)
    where
        E: NavigationApi<Target = Id> + ?Sized,
    {
        while let Ok(command) = self.cmd_rx.recv() {
            let navigated = Self::handle(engine, &command);
            log::trace!(target: "remote.bus", "{command:?} -> {navigated}");
            if self.reply_tx.send(navigated).is_err() {
                break;
            }
        }
        log::debug!(target: "remote.bus", "remote side closed, primary link done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::thread;

    #[derive(Default)]
    struct Engine {
        log: RefCell<Vec<NavCommand>>,
    }

    impl NavigationApi for Engine {
        type Target = Id;

        fn next(&self) -> bool {
            self.log.borrow_mut().push(NavCommand::Next);
            true
        }

        fn prev(&self) -> bool {
            self.log.borrow_mut().push(NavCommand::Prev);
            false
        }

        fn goto(&self, target: &Id) -> bool {
            self.log.borrow_mut().push(NavCommand::Goto(*target));
            target.0 % 2 == 0
        }
    }

    #[test]
    fn commands_round_trip_to_the_engine() {
        let (opener, remote) = channel();
        let primary = thread::spawn(move || {
            let engine = Engine::default();
            opener.serve(&engine);
            engine.log.into_inner()
        });

        let remote = acquire(Some(remote)).unwrap();
        assert!(remote.next());
        assert!(!remote.prev());
        assert!(remote.goto(&Id(4)));
        assert!(!remote.goto(&Id(5)));
        drop(remote);

        let seen = primary.join().unwrap();
        assert_eq!(
            seen,
            vec![
                NavCommand::Next,
                NavCommand::Prev,
                NavCommand::Goto(Id(4)),
                NavCommand::Goto(Id(5)),
            ]
        );
    }

    #[test]
    fn acquire_without_opener_fails() {
        assert!(matches!(acquire(None), Err(SetupError::OpenerMissing)));
    }

    #[test]
    fn acquire_with_dead_primary_fails() {
        let (opener, remote) = channel();
        drop(opener);
        assert!(matches!(acquire(Some(remote)), Err(SetupError::Disconnected)));
    }

    #[test]
    fn lost_primary_reads_as_no_navigation() {
        let (opener, remote) = channel();
        let primary = thread::spawn(move || {
            // Answer the attach, then go away.
            if let Ok(command) = opener.cmd_rx.recv() {
                let _ = opener.reply_tx.send(OpenerLink::handle(&Engine::default(), &command));
            }
        });
        let remote = acquire(Some(remote)).unwrap();
        primary.join().unwrap();

        assert!(!remote.next());
        assert_eq!(remote.request(NavCommand::Prev), Err(LinkError::Disconnected));
    }
}
