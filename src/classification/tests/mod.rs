mod fixture;
mod notifier_test;
