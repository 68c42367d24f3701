/// Subscriptions that remove themselves after their first delivery.
#[derive(Debug)]
pub struct OneShot<K, A> {
    pending: Vec<(K, A)>,
}

impl<K, A> Default for OneShot<K, A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq, A> OneShot<K, A> {
    pub fn subscribe(&mut self, key: K, action: A) {
        self.pending.push((key, action));
    }

    /// Take every action subscribed under `key`, in subscription order.
    pub fn deliver(&mut self, key: &K) -> Vec<A> {
        let (fired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(pending_key, _)| pending_key == key);
        self.pending = kept;
        fired.into_iter().map(|(_, action)| action).collect()
    }

    #[cfg(test)]
    pub fn is_subscribed(&self, key: &K) -> bool {
        self.pending.iter().any(|(pending_key, _)| pending_key == key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_once_then_forgets() {
        let mut listeners = OneShot::default();
        listeners.subscribe("canplay", 1);
        assert!(listeners.is_subscribed(&"canplay"));

        assert_eq!(listeners.deliver(&"canplay"), vec![1]);
        assert!(listeners.deliver(&"canplay").is_empty());
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn other_keys_stay_pending() {
        let mut listeners = OneShot::default();
        listeners.subscribe("canplay", 'a');
        listeners.subscribe("error", 'b');
        listeners.subscribe("canplay", 'c');

        assert_eq!(listeners.deliver(&"canplay"), vec!['a', 'c']);
        assert!(listeners.is_subscribed(&"error"));
        assert_eq!(listeners.len(), 1);
    }
}
