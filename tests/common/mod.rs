//! Shared fixtures for the integration test suite.
#![allow(dead_code)]

use hashbase_store::prelude::*;

/// Marker values produced by the two sample migrations.
pub const MIGRATION_VALUE_1: &str = "MIGRATION_VALUE_1";
pub const MIGRATION_VALUE_2: &str = "MIGRATION_VALUE_2";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn opt(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Narrow model: three string fields plus a remote reference, no migrations.
pub struct SampleModel {
    pub key: RecordKey,
    pub test_str_1: Field<Option<String>>,
    pub test_str_2: Field<Option<String>>,
    pub test_str_3: Field<Option<String>>,
    pub test_remote: RemoteField,
    pub version: Field<u64>,
}

impl SampleModel {
    pub fn new(key: &str, v1: Option<&str>, v2: Option<&str>, v3: Option<&str>) -> Self {
        Self {
            key: key.into(),
            test_str_1: Field::new("test_str_1", "t1", opt(v1)),
            test_str_2: Field::new("test_str_2", "t2", opt(v2)),
            test_str_3: Field::new("test_str_3", "t3", opt(v3)),
            test_remote: RemoteField::new("test_remote", "tr", format!("remote:{key}").into()),
            version: version_field(),
        }
    }
}

impl Model for SampleModel {
    fn key(&self) -> &RecordKey {
        &self.key
    }
    fn version(&self) -> &Field<u64> {
        &self.version
    }
    fn version_mut(&mut self) -> &mut Field<u64> {
        &mut self.version
    }
    fn fields(&self) -> Vec<&dyn FieldSlot> {
        vec![
            &self.test_str_1,
            &self.test_str_2,
            &self.test_str_3,
            &self.test_remote,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
        vec![
            &mut self.test_str_1,
            &mut self.test_str_2,
            &mut self.test_str_3,
            &mut self.test_remote,
        ]
    }
}

/// The model a [`SampleModel`]'s remote field points at.
pub struct RemoteSampleModel {
    pub key: RecordKey,
    pub test_str_1: Field<Option<String>>,
    pub version: Field<u64>,
}

impl RemoteSampleModel {
    pub fn new(key: impl Into<RecordKey>, v1: Option<&str>) -> Self {
        Self {
            key: key.into(),
            test_str_1: Field::new("test_str_1", "t1", opt(v1)),
            version: version_field(),
        }
    }
}

impl Model for RemoteSampleModel {
    fn key(&self) -> &RecordKey {
        &self.key
    }
    fn version(&self) -> &Field<u64> {
        &self.version
    }
    fn version_mut(&mut self) -> &mut Field<u64> {
        &mut self.version
    }
    fn fields(&self) -> Vec<&dyn FieldSlot> {
        vec![&self.test_str_1]
    }
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
        vec![&mut self.test_str_1]
    }
}

/// Wide model: the narrow field set plus two extras, no migrations.
/// Exercises default-on-missing without the migration engine interfering.
pub struct WideModel {
    pub key: RecordKey,
    pub test_str_1: Field<Option<String>>,
    pub test_str_2: Field<Option<String>>,
    pub test_str_3: Field<Option<String>>,
    pub test_extra_1: Field<Option<String>>,
    pub test_extra_2: Field<Option<String>>,
    pub version: Field<u64>,
}

impl WideModel {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            test_str_1: Field::new("test_str_1", "t1", None),
            test_str_2: Field::new("test_str_2", "t2", None),
            test_str_3: Field::new("test_str_3", "t3", None),
            test_extra_1: Field::new("test_extra_1", "e1", None),
            test_extra_2: Field::new("test_extra_2", "e2", None),
            version: version_field(),
        }
    }
}

impl Model for WideModel {
    fn key(&self) -> &RecordKey {
        &self.key
    }
    fn version(&self) -> &Field<u64> {
        &self.version
    }
    fn version_mut(&mut self) -> &mut Field<u64> {
        &mut self.version
    }
    fn fields(&self) -> Vec<&dyn FieldSlot> {
        vec![
            &self.test_str_1,
            &self.test_str_2,
            &self.test_str_3,
            &self.test_extra_1,
            &self.test_extra_2,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
        vec![
            &mut self.test_str_1,
            &mut self.test_str_2,
            &mut self.test_str_3,
            &mut self.test_extra_1,
            &mut self.test_extra_2,
        ]
    }
}

/// The wide model with two declared migrations backfilling the extras.
pub struct MigratedSampleModel {
    pub key: RecordKey,
    pub test_str_1: Field<Option<String>>,
    pub test_str_2: Field<Option<String>>,
    pub test_str_3: Field<Option<String>>,
    pub test_extra_1: Field<Option<String>>,
    pub test_extra_2: Field<Option<String>>,
    pub version: Field<u64>,
}

impl MigratedSampleModel {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            test_str_1: Field::new("test_str_1", "t1", None),
            test_str_2: Field::new("test_str_2", "t2", None),
            test_str_3: Field::new("test_str_3", "t3", None),
            test_extra_1: Field::new("test_extra_1", "e1", None),
            test_extra_2: Field::new("test_extra_2", "e2", None),
            version: version_field(),
        }
    }
}

impl Model for MigratedSampleModel {
    fn key(&self) -> &RecordKey {
        &self.key
    }
    fn version(&self) -> &Field<u64> {
        &self.version
    }
    fn version_mut(&mut self) -> &mut Field<u64> {
        &mut self.version
    }
    fn fields(&self) -> Vec<&dyn FieldSlot> {
        vec![
            &self.test_str_1,
            &self.test_str_2,
            &self.test_str_3,
            &self.test_extra_1,
            &self.test_extra_2,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
        vec![
            &mut self.test_str_1,
            &mut self.test_str_2,
            &mut self.test_str_3,
            &mut self.test_extra_1,
            &mut self.test_extra_2,
        ]
    }
    fn migrations() -> &'static [Migration<Self>] {
        fn add_extra_value_1(model: &mut MigratedSampleModel) -> HashbaseResult<()> {
            model.test_extra_1.set(Some(MIGRATION_VALUE_1.to_string()));
            Ok(())
        }
        fn add_extra_value_2(model: &mut MigratedSampleModel) -> HashbaseResult<()> {
            model.test_extra_2.set(Some(MIGRATION_VALUE_2.to_string()));
            Ok(())
        }
        const STEPS: &[Migration<MigratedSampleModel>] = &[
            Migration {
                name: "add_extra_value_1",
                apply: add_extra_value_1,
            },
            Migration {
                name: "add_extra_value_2",
                apply: add_extra_value_2,
            },
        ];
        STEPS
    }
}

/// A model whose single migration always fails.
pub struct FailingModel {
    pub key: RecordKey,
    pub test_str_1: Field<Option<String>>,
    pub version: Field<u64>,
}

impl FailingModel {
    pub fn new(key: &str, v1: Option<&str>) -> Self {
        Self {
            key: key.into(),
            test_str_1: Field::new("test_str_1", "t1", opt(v1)),
            version: version_field(),
        }
    }
}

impl Model for FailingModel {
    fn key(&self) -> &RecordKey {
        &self.key
    }
    fn version(&self) -> &Field<u64> {
        &self.version
    }
    fn version_mut(&mut self) -> &mut Field<u64> {
        &mut self.version
    }
    fn fields(&self) -> Vec<&dyn FieldSlot> {
        vec![&self.test_str_1]
    }
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
        vec![&mut self.test_str_1]
    }
    fn migrations() -> &'static [Migration<Self>] {
        fn backfill_source(_model: &mut FailingModel) -> HashbaseResult<()> {
            Err(HashbaseError::Store(
                "backfill source unavailable".to_string(),
            ))
        }
        const STEPS: &[Migration<FailingModel>] = &[Migration {
            name: "backfill_source",
            apply: backfill_source,
        }];
        STEPS
    }
}

/// A model whose second migration depends on the first one's effect.
pub struct ChainModel {
    pub key: RecordKey,
    pub counter: Field<i64>,
    pub version: Field<u64>,
}

impl ChainModel {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            counter: Field::new("counter", "ct", 0),
            version: version_field(),
        }
    }
}

impl Model for ChainModel {
    fn key(&self) -> &RecordKey {
        &self.key
    }
    fn version(&self) -> &Field<u64> {
        &self.version
    }
    fn version_mut(&mut self) -> &mut Field<u64> {
        &mut self.version
    }
    fn fields(&self) -> Vec<&dyn FieldSlot> {
        vec![&self.counter]
    }
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot> {
        vec![&mut self.counter]
    }
    fn migrations() -> &'static [Migration<Self>] {
        fn seed_counter(model: &mut ChainModel) -> HashbaseResult<()> {
            model.counter.set(1);
            Ok(())
        }
        fn double_counter(model: &mut ChainModel) -> HashbaseResult<()> {
            model.counter.set(model.counter.value() * 2);
            Ok(())
        }
        const STEPS: &[Migration<ChainModel>] = &[
            Migration {
                name: "seed_counter",
                apply: seed_counter,
            },
            Migration {
                name: "double_counter",
                apply: double_counter,
            },
        ];
        STEPS
    }
}
