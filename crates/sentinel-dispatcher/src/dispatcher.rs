// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex as SyncMutex;
use sentinel_agent::Orchestrator;
use sentinel_core::{DispatcherResult, DispatcherSettings, IncidentCard, IncidentNotification};
use tokio::sync::{mpsc, Mutex as AsyncMutex, Notify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::dedup::DedupCache;

/// Bounded FIFO admission queue plus a fixed worker pool fanning out to the
/// orchestrator.
pub struct Dispatcher {
    card_index: HashMap<String, Arc<IncidentCard>>,
    dedup: DedupCache,
    dedupe_ttl: Duration,
    queue_tx: mpsc::Sender<IncidentNotification>,
    queue_rx: Arc<AsyncMutex<mpsc::Receiver<IncidentNotification>>>,
    orchestrator: Arc<Orchestrator>,
    worker_concurrency: usize,
    workers: SyncMutex<Vec<JoinHandle<()>>>,
    cancel: CancellationToken,
    inflight: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

impl Dispatcher {
    pub fn new(
        cards: Vec<Arc<IncidentCard>>,
        settings: &DispatcherSettings,
        orchestrator: Arc<Orchestrator>,
    ) -> Self {
        let mut card_index = HashMap::new();
        for card in cards {
            if card_index.contains_key(&card.resource) {
                tracing::warn!(
                    resource = %card.resource,
                    card = %card.name,
                    "duplicate incident card for resource; keeping the first one configured"
                );
                continue;
            }
            card_index.insert(card.resource.clone(), card);
        }

        let (queue_tx, queue_rx) = mpsc::channel(settings.queue_size as usize);

        Self {
            card_index,
            dedup: DedupCache::new(),
            dedupe_ttl: Duration::from_secs(settings.dedupe_ttl_seconds as u64),
            queue_tx,
            queue_rx: Arc::new(AsyncMutex::new(queue_rx)),
            orchestrator,
            worker_concurrency: settings.worker_concurrency as usize,
            workers: SyncMutex::new(Vec::new()),
            cancel: CancellationToken::new(),
            inflight: Arc::new(AtomicUsize::new(0)),
            idle: Arc::new(Notify::new()),
        }
    }

    /// Synchronous admission decision. Never blocks waiting for queue space:
    /// a full queue drops the notification rather than backing up the caller.
    pub fn dispatch(&self, notification: IncidentNotification) -> DispatcherResult {
        let now = Instant::now();
        self.dedup.purge_expired(now);

        let key = notification.resource.dedupe_key();
        if self.dedup.is_duplicate(&key, now) {
            return DispatcherResult::duplicate("dedupe cache hit");
        }

        let Some(card) = self.card_index.get(&notification.resource.name) else {
            return DispatcherResult::dropped("no incident card");
        };

        match self.queue_tx.try_send(notification) {
            Ok(()) => {
                self.dedup.insert(key, now, self.dedupe_ttl);
                self.inflight.fetch_add(1, Ordering::SeqCst);
                DispatcherResult::queued(card.clone())
            }
            Err(mpsc::error::TrySendError::Full(_)) => DispatcherResult::dropped("queue full"),
            Err(mpsc::error::TrySendError::Closed(_)) => DispatcherResult::dropped("queue closed"),
        }
    }

    /// Spawn `worker_concurrency` workers. Idempotent.
    pub fn start(self: &Arc<Self>) {
        let mut workers = self.workers.lock();
        if !workers.is_empty() {
            return;
        }
        for id in 0..self.worker_concurrency {
            let dispatcher = self.clone();
            workers.push(tokio::spawn(async move { dispatcher.worker_loop(id).await }));
        }
    }

    /// Cancel all workers, await their termination, and drop remaining
    /// queued items. Idempotent.
    pub async fn stop(&self) {
        self.cancel.cancel();
        let handles: Vec<_> = self.workers.lock().drain(..).collect();
        for handle in handles {
            let _ = handle.await;
        }
    }

    /// Await until every admitted notification has finished processing.
    /// Used by shutdown and by tests that need a deterministic drain point.
    pub async fn join(&self) {
        while self.inflight.load(Ordering::SeqCst) > 0 {
            self.idle.notified().await;
        }
    }

    async fn worker_loop(self: Arc<Self>, worker_id: usize) {
        loop {
            let notification = {
                let mut rx = self.queue_rx.lock().await;
                tokio::select! {
                    _ = self.cancel.cancelled() => None,
                    item = rx.recv() => item,
                }
            };
            let Some(notification) = notification else {
                break;
            };

            let Some(card) = self.card_index.get(&notification.resource.name) else {
                tracing::warn!(
                    worker = worker_id,
                    resource = %notification.resource.name,
                    "incident card vanished from index before processing; skipping"
                );
                self.mark_complete();
                continue;
            };

            if let Err(err) = self.orchestrator.run_incident(card, &notification).await {
                tracing::error!(
                    worker = worker_id,
                    card = %card.name,
                    resource = %notification.resource.name,
                    error = %err,
                    "incident processing failed"
                );
            }
            self.mark_complete();
        }
    }

    fn mark_complete(&self) {
        self.inflight.fetch_sub(1, Ordering::SeqCst);
        self.idle.notify_waiters();
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
