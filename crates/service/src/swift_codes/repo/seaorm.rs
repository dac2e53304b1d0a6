use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::swift_code::{self, Entity as SwiftCodeEntity, PREFIX_LEN};

use crate::errors::ServiceError;
use crate::swift_codes::repository::SwiftCodeRepository;

/// PostgreSQL-backed repository over a pooled `DatabaseConnection`.
#[derive(Clone)]
pub struct SeaOrmSwiftCodeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSwiftCodeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl SwiftCodeRepository for SeaOrmSwiftCodeRepository {
    async fn list(&self) -> Result<Vec<swift_code::Model>, ServiceError> {
        let rows = SwiftCodeEntity::find().all(&self.db).await?;
        Ok(rows)
    }

    async fn find(&self, code: &str) -> Result<Option<swift_code::Model>, ServiceError> {
        let found = SwiftCodeEntity::find_by_id(code.to_string()).one(&self.db).await?;
        Ok(found)
    }

    async fn find_branches(&self, headquarter: &str, prefix: &str) -> Result<Vec<swift_code::Model>, ServiceError> {
        // exact comparison; LIKE would give `\`, `_` and `%` special meaning
        let rows = SwiftCodeEntity::find()
            .filter(swift_code::Column::SwiftCode.ne(headquarter))
            .filter(Expr::cust_with_values(
                format!("substring(swift_code from 1 for {PREFIX_LEN}) = $1"),
                [prefix],
            ))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn list_by_country(&self, country_iso2: &str) -> Result<Vec<swift_code::Model>, ServiceError> {
        let rows = SwiftCodeEntity::find()
            .filter(swift_code::Column::CountryIso2.eq(country_iso2))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, record: swift_code::Model) -> Result<(), ServiceError> {
        swift_code::create(&self.db, record).await?;
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<u64, ServiceError> {
        let res = SwiftCodeEntity::delete_by_id(code.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
