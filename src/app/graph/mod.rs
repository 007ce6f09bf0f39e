mod interaction;
mod view;

pub(super) use interaction::hit_test;
