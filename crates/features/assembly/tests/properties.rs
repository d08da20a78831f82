use foundry_assembly::{ComputerBuilder, CustomPcBuilder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn last_cpu_write_wins(values in proptest::collection::vec("[a-zA-Z0-9 ]{1,16}", 1..8)) {
        let mut builder = CustomPcBuilder::new();
        for value in &values {
            builder.set_cpu(value);
        }
        let pc = builder.get_computer();
        prop_assert_eq!(pc.cpu.as_ref(), values.last());
    }

    #[test]
    fn ram_keeps_call_order(modules in proptest::collection::vec("[A-Z][0-9]{0,3}", 0..32)) {
        let mut builder = CustomPcBuilder::new();
        for module in &modules {
            builder.add_ram(module);
        }
        prop_assert_eq!(builder.get_computer().ram, modules);
    }

    #[test]
    fn snapshot_ignores_later_mutation(first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
        let mut builder = CustomPcBuilder::new();
        let snapshot = builder.set_storage(&first).get_computer();
        builder.set_storage(&second).add_ram(&second);

        prop_assert_eq!(snapshot.storage.as_deref(), Some(first.as_str()));
        prop_assert!(snapshot.ram.is_empty());
    }
}
