use std::collections::HashMap;
use std::sync::{Arc, Mutex as SyncMutex, MutexGuard as SyncGuard, PoisonError};
use tokio::sync::{Mutex, MutexGuard};

type Inner = HashMap<u64, (usize, Arc<Mutex<()>>)>;

/// Serialises avatar syncs per member and remembers the last avatar synced
/// for each one.
#[derive(Default)]
pub struct LockByMember {
    inner: Arc<SyncMutex<Inner>>,
    /// One entry per member ever synced, so bounded by the watched guilds'
    /// member count. Kept for the process lifetime.
    synced: SyncMutex<HashMap<u64, Option<String>>>,
}

pub struct MemberLock {
    member_id: u64,
    inner: Arc<SyncMutex<Inner>>,
    lock: Arc<Mutex<()>>,
}

pub struct MemberGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

fn locked<T>(mutex: &SyncMutex<T>) -> SyncGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LockByMember {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, member_id: u64) -> MemberLock {
        let lock = {
            let mut inner = locked(&self.inner);
            let entry = inner
                .entry(member_id)
                .or_insert_with(|| (0, Arc::new(Mutex::new(()))));
            entry.0 += 1;
            Arc::clone(&entry.1)
        };

        MemberLock {
            member_id,
            inner: Arc::clone(&self.inner),
            lock,
        }
    }

    /// Returns false if `avatar` is already the last one recorded for the member.
    pub fn record_avatar(&self, member_id: u64, avatar: Option<&str>) -> bool {
        let mut synced = locked(&self.synced);
        if synced
            .get(&member_id)
            .is_some_and(|last| last.as_deref() == avatar)
        {
            return false;
        }
        synced.insert(member_id, avatar.map(str::to_string));
        true
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        locked(&self.inner).len()
    }
}

impl MemberLock {
    pub async fn lock(&self) -> MemberGuard<'_> {
        MemberGuard {
            _guard: self.lock.lock().await,
        }
    }
}

impl Drop for MemberLock {
    fn drop(&mut self) {
        let mut inner = locked(&self.inner);
        if let Some(entry) = inner.get_mut(&self.member_id) {
            entry.0 -= 1;
            if entry.0 == 0 {
                inner.remove(&self.member_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_lock_by_member() {
        let locks = LockByMember::new();
        let lock = locks.get(1);
        assert_eq!(lock.member_id, 1);
        let _guard = lock.lock().await;
        let another_lock = locks.get(2);
        let _guard_2 = another_lock.lock().await;
        assert_eq!(locks.tracked(), 2);
    }

    #[tokio::test]
    async fn test_entries_removed_on_drop() {
        let locks = LockByMember::new();
        {
            let first = locks.get(1);
            let second = locks.get(1);
            assert_eq!(locks.tracked(), 1);
            drop(first);
            assert_eq!(locks.tracked(), 1);
            let _guard = second.lock().await;
        }
        assert_eq!(locks.tracked(), 0);
    }

    #[tokio::test]
    async fn test_same_member_queues() {
        let locks = Arc::new(LockByMember::new());
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let (locks, order) = (Arc::clone(&locks), Arc::clone(&order));
            tokio::spawn(async move {
                let lock = locks.get(7);
                let _guard = lock.lock().await;
                order.lock().await.push("first start");
                tokio::time::sleep(Duration::from_millis(20)).await;
                order.lock().await.push("first end");
            })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = {
            let (locks, order) = (Arc::clone(&locks), Arc::clone(&order));
            tokio::spawn(async move {
                let lock = locks.get(7);
                let _guard = lock.lock().await;
                order.lock().await.push("second start");
            })
        };

        let (Ok(()), Ok(())) = tokio::join!(first, second) else {
            panic!("test went wrong")
        };
        assert_eq!(
            *order.lock().await,
            vec!["first start", "first end", "second start"]
        );
    }

    #[test]
    fn test_record_avatar() {
        let locks = LockByMember::new();
        assert!(locks.record_avatar(1, Some("abc")));
        assert!(!locks.record_avatar(1, Some("abc")));
        assert!(locks.record_avatar(2, Some("abc")));
        assert!(locks.record_avatar(1, None));
        assert!(!locks.record_avatar(1, None));
        assert!(locks.record_avatar(1, Some("abc")));
    }
}
