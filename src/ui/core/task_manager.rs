use super::actions::Action;
use crate::pokeapi::PokemonSource;
use crate::store::RequestId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs fetches on the tokio runtime and reports completions as actions.
///
/// Successful responses are held back for `min_latency` before being
/// reported; failures are reported immediately. Nothing is cancelled when a
/// newer request starts: superseded completions are discarded by the
/// resource that issued them.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    min_latency: Duration,
}

impl TaskManager {
    pub fn new(min_latency: Duration) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                min_latency,
            },
            rx,
        )
    }

    pub fn min_latency(&self) -> Duration {
        self.min_latency
    }

    /// Spawn the collection listing fetch
    pub fn spawn_list_fetch(&mut self, source: Arc<dyn PokemonSource>, request_id: RequestId) -> TaskId {
        let action_sender = self.action_sender.clone();
        let min_latency = self.min_latency;

        let handle = tokio::spawn(async move {
            let result = source.fetch_list().await;
            if result.is_ok() {
                tokio::time::sleep(min_latency).await;
            }
            let _ = action_sender.send(Action::PokemonListLoaded { request_id, result });
        });

        self.track(handle, format!("Fetch pokemon list #{}", request_id))
    }

    /// Spawn a detail fetch for one pokemon
    pub fn spawn_detail_fetch(
        &mut self,
        source: Arc<dyn PokemonSource>,
        request_id: RequestId,
        pokemon_id: u32,
    ) -> TaskId {
        let action_sender = self.action_sender.clone();
        let min_latency = self.min_latency;

        let handle = tokio::spawn(async move {
            let result = source.fetch_pokemon(pokemon_id).await;
            if result.is_ok() {
                tokio::time::sleep(min_latency).await;
            }
            let _ = action_sender.send(Action::PokemonLoaded { request_id, result });
        });

        self.track(handle, format!("Fetch pokemon {} #{}", pokemon_id, request_id))
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        log::debug!("Task {}: {}", task_id, description);
        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Forget tasks whose futures have completed, returning their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id))
            .map(|task| {
                log::debug!(
                    "Task {} finished after {:?}: {}",
                    task.id,
                    task.started_at.elapsed(),
                    task.description
                );
                (task.id, task.description)
            })
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
