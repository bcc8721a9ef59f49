//! Rooms page: room list, selected room's bookings and its edit form

use leptos::prelude::*;
use leptos::web_sys;
use tellus_mason::reservation::Room;
use tellus_mason::ApiConfig;

use super::bookings::RoomBookings;
use super::schema_form::{missing_fields_message, SchemaForm};
use crate::api;

#[component]
pub fn Reservations() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::same_origin);
    let (refresh_trigger, set_refresh_trigger) = signal(0u32);
    let (selected, set_selected) = signal(Option::<Room>::None);

    let rooms = LocalResource::new(move || {
        let _ = refresh_trigger.get();
        let config = config.clone();
        async move { api::get_rooms(&config).await }
    });

    let on_edited = Callback::new(move |_: ()| {
        set_selected.set(None);
        set_refresh_trigger.update(|n| *n += 1);
    });

    view! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-6">"Rooms"</h2>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="bg-white rounded-lg shadow p-4">
                    <Suspense fallback=move || view! { <div class="text-gray-500">"Loading rooms..."</div> }>
                        {move || {
                            rooms.get().map(|result| match result {
                                Ok(items) if !items.is_empty() => view! {
                                    <ul class="divide-y divide-gray-200">
                                        {items.into_iter().map(|room| {
                                            let name = room.name.clone();
                                            let is_selected = {
                                                let name = name.clone();
                                                move || selected.with(|s| s.as_ref().is_some_and(|r| r.name == name))
                                            };
                                            view! {
                                                <li>
                                                    <button
                                                        class=move || format!(
                                                            "w-full text-left px-3 py-2 rounded {}",
                                                            if is_selected() { "bg-blue-50 text-blue-700" } else { "hover:bg-gray-50" }
                                                        )
                                                        on:click=move |_| set_selected.set(Some(room.clone()))
                                                    >
                                                        {name}
                                                    </button>
                                                </li>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                }.into_any(),
                                Ok(_) => view! { <p class="text-gray-500">"No rooms found"</p> }.into_any(),
                                Err(e) => view! {
                                    <p class="text-red-600">{format!("Could not fetch the list of rooms: {}", e)}</p>
                                }.into_any(),
                            })
                        }}
                    </Suspense>
                </div>

                <div class="lg:col-span-2 space-y-6">
                    {move || match selected.get() {
                        Some(room) => view! { <RoomDetails room=room on_edited=on_edited/> }.into_any(),
                        None => view! {
                            <p class="text-gray-500">"Select a room to see its bookings"</p>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RoomDetails(room: Room, on_edited: Callback<()>) -> impl IntoView {
    let bookings = match room.bookings_href() {
        Some(href) => view! { <RoomBookings room=room.name.clone() href=href.to_string()/> }.into_any(),
        None => view! {
            <p class="text-red-600">{format!("Cannot extract information about room '{}'", room.name)}</p>
        }.into_any(),
    };

    view! {
        {bookings}
        <EditRoom room=room on_edited=on_edited/>
    }
}

#[component]
fn EditRoom(room: Room, on_edited: Callback<()>) -> impl IntoView {
    let (Some(control), Some(initial)) = (room.edit_control().cloned(), room.edit_form()) else {
        return view! { <span></span> }.into_any();
    };
    let title = control.title_or("Edit room").to_string();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::same_origin);
    let form = RwSignal::new(initial);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Some(message) = missing_fields_message(&current) {
            web_sys::window().and_then(|w| w.alert_with_message(&message).ok());
            return;
        }

        let config = config.clone();
        let control = control.clone();
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit(&config, &control, &current).await {
                Ok(_) => {
                    web_sys::window().and_then(|w| {
                        w.alert_with_message("Room information has been modified successfully").ok()
                    });
                    on_edited.run(());
                }
                Err(e) => {
                    web_sys::window().and_then(|w| {
                        w.alert_with_message(&format!("Could not modify room information: {}", e)).ok()
                    });
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            <SchemaForm form=form/>
            <button
                type="submit"
                class="mt-4 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                disabled=move || saving.get()
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }.into_any()
}
