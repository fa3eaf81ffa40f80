mod tests {
    use myrtio_led_strip::channel::{ChannelAllocator, ChannelId, ChannelTable};

    #[test]
    fn test_acquire_lowest_free() {
        let table = ChannelTable::<3>::new();
        table.init();
        assert_eq!(table.acquire(), Some(ChannelId(0)));
        assert_eq!(table.acquire(), Some(ChannelId(1)));
        table.release(ChannelId(0));
        assert_eq!(table.acquire(), Some(ChannelId(0)));
        assert_eq!(table.acquire(), Some(ChannelId(2)));
        assert_eq!(table.acquire(), None);
        assert_eq!(table.used_count(), 3);
    }

    #[test]
    fn test_init_is_idempotent() {
        let table = ChannelTable::<2>::new();
        table.init();
        let channel = table.acquire().unwrap();
        table.init();
        assert!(table.is_used(channel));
        assert_eq!(table.used_count(), 1);
    }

    #[test]
    fn test_release_out_of_range_is_ignored() {
        let table = ChannelTable::<2>::default();
        table.release(ChannelId(7));
        assert!(!table.is_used(ChannelId(7)));
        assert_eq!(table.used_count(), 0);
        assert_eq!(table.capacity(), 2);
    }
}
