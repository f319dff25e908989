pub mod forward_list;

pub use self::forward_list::ForwardList;
