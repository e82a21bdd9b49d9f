use crate::shared::format::{datetime_cell, money_cell};
use crate::shared::grid::{CellValue, ColumnDef, FilterMode, GridRecord, RecordId, RowAction};
use contracts::domain::a003_order::aggregate::Order;
use contracts::enums::order_status::{OrderStatus, PayStatus};

pub const SEARCH_COLUMN: &str = "client";

impl GridRecord for Order {
    fn record_id(&self) -> RecordId {
        self.order_id
    }
}

pub fn status_tone(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Shipped => "primary",
        OrderStatus::Delivered => "success",
        OrderStatus::Cancelled => "error",
        OrderStatus::Other(_) => "neutral",
    }
}

pub fn pay_tone(status: &PayStatus) -> &'static str {
    match status {
        PayStatus::Paid => "success",
        PayStatus::Unpaid => "warning",
        PayStatus::Other(_) => "neutral",
    }
}

pub fn columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::display("order_id", "№", |o: &Order| CellValue::Integer(o.order_id)).pinned(),
        ColumnDef::display(SEARCH_COLUMN, "Клиент", |o: &Order| {
            CellValue::text(o.client_label())
        })
        .filterable(FilterMode::contains()),
        ColumnDef::display("telephone", "Телефон", |o: &Order| {
            CellValue::text(o.client_telephone.clone())
        })
        .unsortable(),
        ColumnDef::display("address", "Адрес", |o: &Order| CellValue::text(o.address.clone()))
            .unsortable(),
        ColumnDef::display("status", "Статус", |o: &Order| {
            CellValue::text(o.status.display_name())
        })
        .badge(|o: &Order| status_tone(&o.status)),
        ColumnDef::display("pay_status", "Оплата", |o: &Order| {
            CellValue::text(o.pay_status.display_name())
        })
        .badge(|o: &Order| pay_tone(&o.pay_status)),
        ColumnDef::display("total", "Сумма", |o: &Order| CellValue::Number(o.total_price))
            .format(money_cell)
            .align_right(),
        ColumnDef::display("created_at", "Создан", |o: &Order| {
            CellValue::timestamp(Some(&o.created_at))
        })
        .format(datetime_cell),
        ColumnDef::actions(&[RowAction::OpenDetails]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::{derive, TableState};
    use contracts::domain::a003_order::aggregate::UNKNOWN_CLIENT;

    fn order(id: i64, client: Option<&str>) -> Order {
        Order {
            order_id: id,
            client_name: client.map(str::to_string),
            client_telephone: "923000000".to_string(),
            total_price: 1500.0,
            address: "Luanda".to_string(),
            status: OrderStatus::Delivered,
            pay_status: PayStatus::Paid,
            created_at: "2024-05-01T10:30:00".to_string(),
        }
    }

    #[test]
    fn test_client_placeholder_is_searchable() {
        let rows = vec![order(1, Some("Ana")), order(2, None), order(3, Some("  "))];
        let mut state = TableState::new(5);
        state.set_filter(SEARCH_COLUMN, "não");
        let model = derive(&rows, &state, &columns());
        assert!(model.rows.is_empty());

        state.set_filter(SEARCH_COLUMN, &UNKNOWN_CLIENT.to_lowercase());
        let model = derive(&rows, &state, &columns());
        let ids: Vec<_> = model.rows.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_order_cells() {
        let cols = columns();
        let o = order(7, Some("Ana"));
        let text = |key: &str| {
            cols.iter()
                .find(|c| c.key == key)
                .map(|c| c.render_text(&o))
                .unwrap()
        };
        assert_eq!(text("total"), "1 500,00 Kz");
        assert_eq!(text("created_at"), "01.05.2024 10:30");
        assert_eq!(text("status"), "Доставлен");
        assert_eq!(status_tone(&o.status), "success");
        assert_eq!(pay_tone(&PayStatus::Unpaid), "warning");
    }
}
