use leptos::*;

use crate::merge_class;

#[component]
/// Base table root element.
pub fn Table(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_class("widget-table", class.as_deref())
            aria-label=aria_label
            data-widget="table"
        >
            {children()}
        </table>
    }
}

#[component]
/// Base table header section.
pub fn TableHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <thead class=merge_class("widget-table-header", class.as_deref()) data-widget="table-header">
            {children()}
        </thead>
    }
}

#[component]
/// Base table body section.
pub fn TableBody(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <tbody class=merge_class("widget-table-body", class.as_deref()) data-widget="table-body">
            {children()}
        </tbody>
    }
}

#[component]
/// Base table footer section.
pub fn TableFooter(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <tfoot class=merge_class("widget-table-footer", class.as_deref()) data-widget="table-footer">
            {children()}
        </tfoot>
    }
}

#[component]
/// Base table row.
pub fn TableRow(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr class=merge_class("widget-table-row", class.as_deref()) data-widget="table-row">
            {children()}
        </tr>
    }
}

#[component]
/// Base table column header cell.
pub fn TableHead(
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = "col")] scope: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <th
            class=merge_class("widget-table-head", class.as_deref())
            scope=scope
            data-widget="table-head"
        >
            {children()}
        </th>
    }
}

#[component]
/// Base table data cell.
pub fn TableCell(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <td class=merge_class("widget-table-cell", class.as_deref()) data-widget="table-cell">
            {children()}
        </td>
    }
}

#[component]
/// Base table caption.
pub fn TableCaption(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <caption class=merge_class("widget-table-caption", class.as_deref()) data-widget="table-caption">
            {children()}
        </caption>
    }
}
