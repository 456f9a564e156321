use contracts::shared::table::{ColumnDef, TableRow as BodyRow};
use leptos::prelude::*;
use thaw::*;

/// One data cell handed to a page's cell renderer.
#[derive(Debug, Clone)]
pub struct CellRef {
    pub row_key: String,
    pub column: &'static str,
    pub text: String,
}

/// Table for a record kind. The body is rebuilt from `rows` on every change;
/// each row keeps its record key so action buttons resolve back to the
/// record.
///
/// Data cells render as text unless `render_cell` is given. The trailing
/// "actions" column, when the kind has one, is filled by `actions`.
#[component]
pub fn RecordTable(
    columns: &'static [ColumnDef],
    #[prop(into)] rows: Signal<Vec<BodyRow>>,
    #[prop(optional)] render_cell: Option<Callback<CellRef, AnyView>>,
    #[prop(optional)] actions: Option<Callback<String, AnyView>>,
) -> impl IntoView {
    let data_columns: Vec<&'static str> = columns
        .iter()
        .map(|c| c.key)
        .filter(|key| *key != "actions")
        .collect();
    let has_actions = data_columns.len() < columns.len();

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    {columns
                        .iter()
                        .map(|c| view! { <TableHeaderCell min_width=80.0>{c.title}</TableHeaderCell> })
                        .collect_view()}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let data_columns = data_columns.clone();
                    rows.get()
                        .into_iter()
                        .map(|row| match row {
                            BodyRow::Placeholder { colspan, message } => view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan.to_string()>
                                        <TableCellLayout>{message}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any(),
                            BodyRow::Record { key, cells } => {
                                let data_cells = data_columns
                                    .iter()
                                    .zip(cells)
                                    .map(|(column, text)| {
                                        let content = match render_cell {
                                            Some(render) => render.run(CellRef {
                                                row_key: key.clone(),
                                                column: *column,
                                                text,
                                            }),
                                            None => text.into_any(),
                                        };
                                        view! {
                                            <TableCell>
                                                <TableCellLayout>{content}</TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view();
                                let action_cell = has_actions.then(|| {
                                    let content = actions.map(|render| render.run(key.clone()));
                                    view! {
                                        <TableCell>
                                            <TableCellLayout>{content}</TableCellLayout>
                                        </TableCell>
                                    }
                                });
                                view! {
                                    <TableRow attr:data-key=key.clone()>
                                        {data_cells}
                                        {action_cell}
                                    </TableRow>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
    }
}
